use thiserror::Error;

/// Errors returned when a text line is not a valid hex packet.
///
/// # Examples
/// ```
/// use commander_core::HexError;
///
/// let err = HexError::OddDigitCount { digits: 3 };
/// assert!(err.to_string().contains("odd number of hex digits"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("empty packet")]
    Empty,
    #[error("odd number of hex digits: {digits}")]
    OddDigitCount { digits: usize },
    #[error("invalid hex digit '{digit}' at column {column}")]
    InvalidDigit { digit: char, column: usize },
    #[error("packet too long: max {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },
}
