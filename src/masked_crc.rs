//! Masked CRC-32C checksums as used by the TFRecord format.
//!
//! Storing the CRC of a string that itself contains embedded CRCs is
//! problematic, so TFRecord stores a rotated and offset version of the
//! Castagnoli checksum instead of the raw value.

const MASK_DELTA: u32 = 0xa282_ead8;

/// A masked CRC-32C, ready to be written next to the data it covers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MaskedCrc(pub u32);

impl MaskedCrc {
    /// Computes the masked checksum of `bytes`.
    pub fn compute(bytes: &[u8]) -> Self {
        Self::mask(crc::crc32::checksum_castagnoli(bytes))
    }

    fn mask(crc: u32) -> Self {
        MaskedCrc(((crc >> 15) | (crc << 17)).wrapping_add(MASK_DELTA))
    }

    /// Recovers the raw CRC-32C from its masked form.
    pub fn unmask(self) -> u32 {
        let rot = self.0.wrapping_sub(MASK_DELTA);
        (rot >> 17) | (rot << 15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_checksum() {
        // CRC-32C check value from RFC 3720.
        assert_eq!(crc::crc32::checksum_castagnoli(b"123456789"), 0xe306_9283);
    }

    #[test]
    fn test_empty_length_header() {
        // Header of a zero-length TFRecord, as written by TensorFlow.
        let masked = MaskedCrc::compute(&0u64.to_le_bytes());
        assert_eq!(masked.unmask(), crc::crc32::checksum_castagnoli(&[0; 8]));
    }

    #[test]
    fn test_unmask_inverts_mask() {
        for &raw in &[0u32, 1, 0xdead_beef, u32::MAX] {
            assert_eq!(MaskedCrc::mask(raw).unmask(), raw);
        }
    }
}
