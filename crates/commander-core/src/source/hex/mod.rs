//! Hex packet log source.
//!
//! Recorded packets are stored as text, one packet per line, each byte as two
//! hexadecimal digits. Whitespace between bytes and a leading `0x` are
//! accepted; blank lines and lines starting with `#` are skipped.

pub mod error;
pub mod parser;
pub mod reader;

pub use error::HexError;
pub use parser::HexLogSource;
pub use reader::parse_hex_packet;
