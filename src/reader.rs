//! Sequential reading of event files, verifying record checksums.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use prost::Message;

use crate::error::Result;
use crate::proto::tensorboard as pb;
use crate::tf_record::TfRecord;

/// Iterates over the events in a TFRecord stream.
///
/// Iteration ends at a clean end of stream. The first error is yielded once
/// and then iteration stops, since record boundaries can no longer be trusted.
pub struct EventReader<R> {
    reader: R,
    done: bool,
}

impl<R: Read> EventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }

    fn read_event(&mut self) -> Result<Option<pb::Event>> {
        let record = match TfRecord::read(&mut self.reader)? {
            Some(record) => record,
            None => return Ok(None),
        };
        record.checksum()?;
        Ok(Some(pb::Event::decode(&record.data[..])?))
    }
}

impl<R: Read> Iterator for EventReader<R> {
    type Item = Result<pb::Event>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Reads every event in the file at `path`.
pub fn read_events<P: AsRef<Path>>(path: P) -> Result<Vec<pb::Event>> {
    let file = File::open(path)?;
    EventReader::new(BufReader::new(file)).collect()
}
