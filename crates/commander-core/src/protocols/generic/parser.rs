use super::PacketType;
use super::error::DecodeError;
use super::layout;
use super::reader::GenericReader;
use crate::diagnostics::DiagnosticsSink;
use crate::setpoint::{AxisMode, ControlModeCode, Setpoint};

/// World-frame velocity command (m/s, yaw rate in rad/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityWorld {
    pub vx: f32,
    pub vy: f32,
    pub vz: f32,
    pub yawrate: f32,
}

/// Bit-packed full-control header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullControlHeader {
    /// Decoded for completeness; nothing downstream consumes it yet.
    pub packet_has_external_reference: bool,
    pub set_emergency: bool,
    pub reset_emergency: bool,
    pub control_mode_x: ControlModeCode,
    pub control_mode_y: ControlModeCode,
    pub control_mode_z: ControlModeCode,
}

impl FullControlHeader {
    /// Extract the header fields from the raw little-endian word. Bits 12..16
    /// are padding and ignored.
    pub fn from_bits(bits: u16) -> Self {
        let flag = |bit: u16| (bits >> bit) & 1 == 1;
        let mode = |shift: u16| {
            ControlModeCode::from_bits(((bits >> shift) & layout::HEADER_MODE_MASK) as u8)
        };
        Self {
            packet_has_external_reference: flag(layout::HEADER_EXTERNAL_REFERENCE_BIT),
            set_emergency: flag(layout::HEADER_SET_EMERGENCY_BIT),
            reset_emergency: flag(layout::HEADER_RESET_EMERGENCY_BIT),
            control_mode_x: mode(layout::HEADER_MODE_X_SHIFT),
            control_mode_y: mode(layout::HEADER_MODE_Y_SHIFT),
            control_mode_z: mode(layout::HEADER_MODE_Z_SHIFT),
        }
    }
}

/// Full-control packet with every term widened to `f32`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullControl {
    pub header: FullControlHeader,
    pub x: [f32; layout::FULL_CONTROL_AXIS_TERMS],
    pub y: [f32; layout::FULL_CONTROL_AXIS_TERMS],
    pub z: [f32; layout::FULL_CONTROL_AXIS_TERMS],
    pub yaw: [f32; layout::FULL_CONTROL_YAW_TERMS],
}

pub fn parse_velocity_world(payload: &[u8]) -> Result<VelocityWorld, DecodeError> {
    let reader = GenericReader::new(
        payload,
        PacketType::VelocityWorld,
        layout::VELOCITY_PAYLOAD_LEN,
    );
    reader.require_exact_len()?;

    Ok(VelocityWorld {
        vx: reader.read_f32_le(layout::VELOCITY_VX_RANGE)?,
        vy: reader.read_f32_le(layout::VELOCITY_VY_RANGE)?,
        vz: reader.read_f32_le(layout::VELOCITY_VZ_RANGE)?,
        yawrate: reader.read_f32_le(layout::VELOCITY_YAWRATE_RANGE)?,
    })
}

pub fn parse_full_control(payload: &[u8]) -> Result<FullControl, DecodeError> {
    let reader = GenericReader::new(
        payload,
        PacketType::FullControl,
        layout::FULL_CONTROL_PAYLOAD_LEN,
    );
    reader.require_exact_len()?;

    let header = FullControlHeader::from_bits(
        reader.read_u16_le(layout::FULL_CONTROL_HEADER_RANGE)?,
    );
    Ok(FullControl {
        header,
        x: reader.read_halves(layout::FULL_CONTROL_X_OFFSET)?,
        y: reader.read_halves(layout::FULL_CONTROL_Y_OFFSET)?,
        z: reader.read_halves(layout::FULL_CONTROL_Z_OFFSET)?,
        yaw: reader.read_halves(layout::FULL_CONTROL_YAW_OFFSET)?,
    })
}

/// Stop: the neutral setpoint already means "motors off", so the payload is
/// ignored whatever its length.
pub fn decode_stop(
    _payload: &[u8],
    _setpoint: &mut Setpoint,
    _diagnostics: &mut dyn DiagnosticsSink,
) -> Result<(), DecodeError> {
    Ok(())
}

/// Velocity in the world frame on all three axes plus a yaw rate.
pub fn decode_velocity_world(
    payload: &[u8],
    setpoint: &mut Setpoint,
    _diagnostics: &mut dyn DiagnosticsSink,
) -> Result<(), DecodeError> {
    let packet = parse_velocity_world(payload)?;

    setpoint.mode.x = AxisMode::Velocity;
    setpoint.mode.y = AxisMode::Velocity;
    setpoint.mode.z = AxisMode::Velocity;
    setpoint.mode.yaw = AxisMode::Velocity;

    setpoint.velocity.x = packet.vx;
    setpoint.velocity.y = packet.vy;
    setpoint.velocity.z = packet.vz;

    setpoint.legacy_mode.x = ControlModeCode::VELOCITY;
    setpoint.legacy_mode.y = ControlModeCode::VELOCITY;
    setpoint.legacy_mode.z = ControlModeCode::VELOCITY;

    setpoint.x[1] = packet.vx;
    setpoint.y[1] = packet.vy;
    setpoint.z[1] = packet.vz;

    setpoint.attitude_rate.yaw = packet.yawrate;
    Ok(())
}

/// Position, velocity and acceleration terms per axis, with the mode codes
/// taken verbatim from the header.
pub fn decode_full_control(
    payload: &[u8],
    setpoint: &mut Setpoint,
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<(), DecodeError> {
    let packet = parse_full_control(payload)?;

    setpoint.legacy_mode.x = packet.header.control_mode_x;
    setpoint.legacy_mode.y = packet.header.control_mode_y;
    setpoint.legacy_mode.z = packet.header.control_mode_z;
    setpoint.emergency.set = packet.header.set_emergency;
    setpoint.emergency.reset = packet.header.reset_emergency;

    setpoint.x = packet.x;
    setpoint.y = packet.y;
    setpoint.z = packet.z;
    setpoint.yaw = packet.yaw;

    diagnostics.record_full_control(setpoint.x[0], setpoint.y[0], setpoint.z[0]);
    Ok(())
}
