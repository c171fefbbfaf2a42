use super::PacketType;
use super::error::DecodeError;
use super::layout;
use crate::protocols::common::half_to_f32;

/// Little-endian field access over a fixed-length payload.
///
/// The reader is bound to the payload length its packet type requires;
/// `require_exact_len` must pass before any field is read.
pub struct GenericReader<'a> {
    payload: &'a [u8],
    packet_type: PacketType,
    expected: usize,
}

impl<'a> GenericReader<'a> {
    pub fn new(payload: &'a [u8], packet_type: PacketType, expected: usize) -> Self {
        Self {
            payload,
            packet_type,
            expected,
        }
    }

    pub fn require_exact_len(&self) -> Result<(), DecodeError> {
        if self.payload.len() != self.expected {
            return Err(self.mismatch());
        }
        Ok(())
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.payload.get(range).ok_or_else(|| self.mismatch())
    }

    pub fn read_u16_le(&self, range: std::ops::Range<usize>) -> Result<u16, DecodeError> {
        let bytes = self.read_slice(range)?;
        let bytes: [u8; 2] = bytes.try_into().map_err(|_| self.mismatch())?;
        Ok(u16::from_le_bytes(bytes))
    }

    pub fn read_f32_le(&self, range: std::ops::Range<usize>) -> Result<f32, DecodeError> {
        let bytes = self.read_slice(range)?;
        let bytes: [u8; 4] = bytes.try_into().map_err(|_| self.mismatch())?;
        Ok(f32::from_le_bytes(bytes))
    }

    /// Read `N` consecutive binary16 values starting at `offset`, widened to `f32`.
    pub fn read_halves<const N: usize>(&self, offset: usize) -> Result<[f32; N], DecodeError> {
        let mut values = [0.0f32; N];
        for (index, value) in values.iter_mut().enumerate() {
            let start = offset + index * layout::HALF_LEN;
            *value = half_to_f32(self.read_u16_le(start..start + layout::HALF_LEN)?);
        }
        Ok(values)
    }

    fn mismatch(&self) -> DecodeError {
        DecodeError::PayloadLengthMismatch {
            packet_type: self.packet_type,
            expected: self.expected,
            actual: self.payload.len(),
        }
    }
}
