use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::source::{PacketEvent, PacketSource, SourceError};

use super::reader::{is_skipped_line, parse_hex_packet};

/// `PacketSource` over a hex packet log.
pub struct HexLogSource<R = BufReader<File>> {
    reader: R,
    line: usize,
    buffer: String,
}

impl HexLogSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> HexLogSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> PacketSource for HexLogSource<R> {
    fn next_packet(&mut self) -> Result<Option<PacketEvent>, SourceError> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            if is_skipped_line(&self.buffer) {
                continue;
            }

            let data = parse_hex_packet(&self.buffer).map_err(|source| {
                SourceError::InvalidLine {
                    line: self.line,
                    source,
                }
            })?;
            return Ok(Some(PacketEvent {
                line: self.line,
                data,
            }));
        }
    }
}
