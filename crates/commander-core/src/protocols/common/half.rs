//! IEEE-754 binary16 widening.

const SIGN_MASK: u16 = 0x8000;
const EXPONENT_MASK: u16 = 0x7c00;
const MANTISSA_MASK: u16 = 0x03ff;
const MANTISSA_BITS: u32 = 10;

/// Difference between the binary32 (127) and binary16 (15) exponent biases.
const EXPONENT_REBIAS: u32 = 127 - 15;
/// Mantissa width difference between binary32 (23) and binary16 (10).
const MANTISSA_SHIFT: u32 = 23 - MANTISSA_BITS;

const F32_EXPONENT_ALL_ONES: u32 = 0x7f80_0000;

/// Widen a binary16 bit pattern to `f32`.
///
/// Every binary16 value is exactly representable in binary32, so the
/// conversion is lossless: subnormals become normal `f32` values, infinities
/// keep their sign, and NaN payloads are carried over in the high mantissa
/// bits.
///
/// # Examples
/// ```
/// use commander_core::half_to_f32;
///
/// assert_eq!(half_to_f32(0x3c00), 1.0);
/// assert_eq!(half_to_f32(0xc000), -2.0);
/// assert_eq!(half_to_f32(0x7c00), f32::INFINITY);
/// ```
pub fn half_to_f32(bits: u16) -> f32 {
    let sign = u32::from(bits & SIGN_MASK) << 16;
    let exponent = u32::from((bits & EXPONENT_MASK) >> MANTISSA_BITS);
    let mantissa = u32::from(bits & MANTISSA_MASK);

    let magnitude = match (exponent, mantissa) {
        (0, 0) => 0,
        (0, _) => {
            // Subnormal: shift the leading one into the implicit bit position.
            let shift = mantissa.leading_zeros() - (31 - MANTISSA_BITS);
            let normalized = (mantissa << shift) & u32::from(MANTISSA_MASK);
            ((EXPONENT_REBIAS + 1 - shift) << 23) | (normalized << MANTISSA_SHIFT)
        }
        (0x1f, _) => F32_EXPONENT_ALL_ONES | (mantissa << MANTISSA_SHIFT),
        _ => ((exponent + EXPONENT_REBIAS) << 23) | (mantissa << MANTISSA_SHIFT),
    };

    f32::from_bits(sign | magnitude)
}
