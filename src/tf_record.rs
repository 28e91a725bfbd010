//! TFRecord framing: `len: u64 | crc(len): u32 | data | crc(data): u32`, all
//! little-endian, with masked CRC-32C checksums.

use std::io::{self, Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::error::{Error, Result};
use crate::masked_crc::MaskedCrc;

/// Length of the fixed header: the `u64` length plus its checksum.
pub const HEADER_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TfRecord {
    pub header: [u8; 8],
    pub header_crc: MaskedCrc,
    pub data: Vec<u8>,
    pub data_crc: MaskedCrc,
}

impl TfRecord {
    /// Frames `data` as a record, computing both checksums.
    pub fn from_data(data: Vec<u8>) -> Self {
        let header = (data.len() as u64).to_le_bytes();
        let header_crc = MaskedCrc::compute(&header);
        let data_crc = MaskedCrc::compute(&data);
        TfRecord {
            header,
            header_crc,
            data,
            data_crc,
        }
    }

    /// Total number of bytes this record occupies on disk.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.data.len() + 4
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.header)?;
        writer.write_u32::<LE>(self.header_crc.0)?;
        writer.write_all(&self.data)?;
        writer.write_u32::<LE>(self.data_crc.0)?;
        Ok(())
    }

    /// Reads one record. Returns `Ok(None)` on a clean end of stream at a
    /// record boundary. Checksums are not verified; see [`Self::checksum`].
    pub fn read<R: Read>(reader: &mut R) -> Result<Option<Self>> {
        let mut header = [0u8; 8];
        match read_exact_or_eof(reader, &mut header)? {
            Filled::Empty => return Ok(None),
            Filled::Partial => return Err(Error::Truncated),
            Filled::Full => (),
        }
        let header_crc = MaskedCrc(reader.read_u32::<LE>().map_err(truncated)?);
        let len = u64::from_le_bytes(header);
        // Don't trust `len` for allocation until the header checksum passes.
        if MaskedCrc::compute(&header) != header_crc {
            return Err(Error::Checksum { what: "length" });
        }
        let mut data = Vec::new();
        reader
            .by_ref()
            .take(len)
            .read_to_end(&mut data)
            .map_err(Error::Io)?;
        if (data.len() as u64) < len {
            return Err(Error::Truncated);
        }
        let data_crc = MaskedCrc(reader.read_u32::<LE>().map_err(truncated)?);
        Ok(Some(TfRecord {
            header,
            header_crc,
            data,
            data_crc,
        }))
    }

    /// Verifies both stored checksums against the record contents.
    pub fn checksum(&self) -> Result<()> {
        if MaskedCrc::compute(&self.header) != self.header_crc {
            return Err(Error::Checksum { what: "length" });
        }
        if MaskedCrc::compute(&self.data) != self.data_crc {
            return Err(Error::Checksum { what: "data" });
        }
        Ok(())
    }
}

enum Filled {
    Empty,
    Partial,
    Full,
}

fn read_exact_or_eof<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<Filled> {
    let mut pos = 0;
    while pos < buf.len() {
        match reader.read(&mut buf[pos..]) {
            Ok(0) if pos == 0 => return Ok(Filled::Empty),
            Ok(0) => return Ok(Filled::Partial),
            Ok(n) => pos += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Io(e)),
        }
    }
    Ok(Filled::Full)
}

fn truncated(e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        Error::Truncated
    } else {
        Error::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let record = TfRecord::from_data(b"hello".to_vec());
        let mut buf = Vec::new();
        record.write(&mut buf).unwrap();
        assert_eq!(buf.len(), record.encoded_len());
        assert_eq!(&buf[..8], &5u64.to_le_bytes());
        assert_eq!(&buf[12..17], b"hello");
        assert_eq!(
            u32::from_le_bytes([buf[17], buf[18], buf[19], buf[20]]),
            MaskedCrc::compute(b"hello").0
        );
    }

    #[test]
    fn test_read_back() {
        let mut buf = Vec::new();
        TfRecord::from_data(b"one".to_vec()).write(&mut buf).unwrap();
        TfRecord::from_data(Vec::new()).write(&mut buf).unwrap();
        let mut cursor = io::Cursor::new(buf);
        let first = TfRecord::read(&mut cursor).unwrap().unwrap();
        first.checksum().unwrap();
        assert_eq!(first.data, b"one");
        let second = TfRecord::read(&mut cursor).unwrap().unwrap();
        assert!(second.data.is_empty());
        assert!(TfRecord::read(&mut cursor).unwrap().is_none());
    }

    #[test]
    fn test_truncated() {
        let mut buf = Vec::new();
        TfRecord::from_data(b"payload".to_vec())
            .write(&mut buf)
            .unwrap();
        for cut in &[3, HEADER_LEN + 2, buf.len() - 1] {
            let mut cursor = io::Cursor::new(&buf[..*cut]);
            match TfRecord::read(&mut cursor) {
                Err(Error::Truncated) => (),
                other => panic!("cut at {}: expected truncation, got {:?}", cut, other),
            }
        }
    }

    #[test]
    fn test_corrupt_data() {
        let mut buf = Vec::new();
        TfRecord::from_data(b"payload".to_vec())
            .write(&mut buf)
            .unwrap();
        buf[HEADER_LEN] ^= 0xff;
        let record = TfRecord::read(&mut io::Cursor::new(buf)).unwrap().unwrap();
        match record.checksum() {
            Err(Error::Checksum { what: "data" }) => (),
            other => panic!("expected data checksum failure, got {:?}", other),
        }
    }

    #[test]
    fn test_corrupt_length() {
        let mut buf = Vec::new();
        TfRecord::from_data(b"payload".to_vec())
            .write(&mut buf)
            .unwrap();
        buf[7] = 0x40;
        match TfRecord::read(&mut io::Cursor::new(buf)) {
            Err(Error::Checksum { what: "length" }) => (),
            other => panic!("expected length checksum failure, got {:?}", other),
        }
    }
}
