use thiserror::Error;

use super::PacketType;

/// Errors returned by generic commander decoding.
///
/// # Examples
/// ```
/// use commander_core::{DecodeError, PacketType};
///
/// let err = DecodeError::PayloadLengthMismatch {
///     packet_type: PacketType::VelocityWorld,
///     expected: 16,
///     actual: 15,
/// };
/// assert!(err.to_string().contains("expected 16 bytes, got 15"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty packet: missing type tag")]
    EmptyPacket,
    #[error("payload length mismatch for {packet_type}: expected {expected} bytes, got {actual}")]
    PayloadLengthMismatch {
        packet_type: PacketType,
        expected: usize,
        actual: usize,
    },
}
