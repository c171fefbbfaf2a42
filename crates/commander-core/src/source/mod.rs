mod hex;

pub use hex::{HexError, HexLogSource, parse_hex_packet};

use thiserror::Error;

/// One recorded packet with its 1-based line number in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketEvent {
    pub line: usize,
    pub data: Vec<u8>,
}

pub trait PacketSource {
    fn next_packet(&mut self) -> Result<Option<PacketEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid packet on line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: HexError,
    },
}
