//! Byte offsets and bit positions of the generic commander packets.

pub const TYPE_TAG_OFFSET: usize = 0;
pub const PAYLOAD_OFFSET: usize = 1;
pub const MAX_PAYLOAD_LEN: usize = 29;
pub const MAX_PACKET_LEN: usize = PAYLOAD_OFFSET + MAX_PAYLOAD_LEN;

pub const TAG_STOP: u8 = 0;
pub const TAG_VELOCITY_WORLD: u8 = 1;
pub const TAG_RATE: u8 = 2;
pub const TAG_FULL_CONTROL: u8 = 3;

// Velocity world: four little-endian f32.
pub const VELOCITY_VX_RANGE: std::ops::Range<usize> = 0..4;
pub const VELOCITY_VY_RANGE: std::ops::Range<usize> = 4..8;
pub const VELOCITY_VZ_RANGE: std::ops::Range<usize> = 8..12;
pub const VELOCITY_YAWRATE_RANGE: std::ops::Range<usize> = 12..16;
pub const VELOCITY_PAYLOAD_LEN: usize = 16;

// Full control: little-endian u16 header followed by binary16 terms.
pub const FULL_CONTROL_HEADER_RANGE: std::ops::Range<usize> = 0..2;
pub const FULL_CONTROL_X_OFFSET: usize = 2;
pub const FULL_CONTROL_Y_OFFSET: usize = 8;
pub const FULL_CONTROL_Z_OFFSET: usize = 14;
pub const FULL_CONTROL_YAW_OFFSET: usize = 20;
pub const FULL_CONTROL_AXIS_TERMS: usize = 3;
pub const FULL_CONTROL_YAW_TERMS: usize = 2;
pub const HALF_LEN: usize = 2;
pub const FULL_CONTROL_PAYLOAD_LEN: usize =
    FULL_CONTROL_YAW_OFFSET + FULL_CONTROL_YAW_TERMS * HALF_LEN;

pub const HEADER_EXTERNAL_REFERENCE_BIT: u16 = 0;
pub const HEADER_SET_EMERGENCY_BIT: u16 = 1;
pub const HEADER_RESET_EMERGENCY_BIT: u16 = 2;
pub const HEADER_MODE_X_SHIFT: u16 = 3;
pub const HEADER_MODE_Y_SHIFT: u16 = 6;
pub const HEADER_MODE_Z_SHIFT: u16 = 9;
pub const HEADER_MODE_MASK: u16 = 0b111;
