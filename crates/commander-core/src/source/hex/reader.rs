use super::error::HexError;
use crate::protocols::generic::layout;

const COMMENT_PREFIX: char = '#';
const HEX_PREFIXES: [&str; 2] = ["0x", "0X"];
const HEX_PREFIX_LEN: usize = 2;

/// Whether a log line carries no packet (blank or comment).
pub fn is_skipped_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
}

/// Parse one hex-encoded packet.
///
/// Columns in [`HexError::InvalidDigit`] count characters from 1, starting at
/// the first non-blank character of `text`.
///
/// # Examples
/// ```
/// use commander_core::parse_hex_packet;
///
/// assert_eq!(parse_hex_packet("00 ff 1A").unwrap(), vec![0x00, 0xff, 0x1a]);
/// assert_eq!(parse_hex_packet("0x0301").unwrap(), vec![0x03, 0x01]);
/// ```
pub fn parse_hex_packet(text: &str) -> Result<Vec<u8>, HexError> {
    let trimmed = text.trim();
    let (body, body_column) = match HEX_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(*prefix))
    {
        Some(rest) => (rest, HEX_PREFIX_LEN),
        None => (trimmed, 0),
    };

    let mut digits = Vec::with_capacity(body.len());
    for (column, ch) in body.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        let value = ch.to_digit(16).ok_or(HexError::InvalidDigit {
            digit: ch,
            column: body_column + column + 1,
        })?;
        digits.push(value as u8);
    }

    if digits.is_empty() {
        return Err(HexError::Empty);
    }
    if digits.len() % 2 != 0 {
        return Err(HexError::OddDigitCount {
            digits: digits.len(),
        });
    }

    let bytes: Vec<u8> = digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect();
    if bytes.len() > layout::MAX_PACKET_LEN {
        return Err(HexError::TooLong {
            max: layout::MAX_PACKET_LEN,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}
