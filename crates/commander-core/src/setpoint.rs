//! Normalized setpoint model produced by the packet dispatcher.
//!
//! A [`Setpoint`] always starts out neutral (`Default`), which is the "stop"
//! command: every axis disabled, every term zero, no emergency request.
//! Decoders only ever write into a neutral value.

use serde::{Deserialize, Serialize};

/// Control law selected for one axis.
///
/// # Examples
/// ```
/// use commander_core::AxisMode;
///
/// assert_eq!(AxisMode::default(), AxisMode::Disable);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMode {
    #[default]
    Disable,
    Absolute,
    Velocity,
}

/// Legacy 3-bit control mode code.
///
/// Each bit enables one term of the axis: position, velocity, acceleration.
/// Values are always masked to three bits.
///
/// # Examples
/// ```
/// use commander_core::ControlModeCode;
///
/// let code = ControlModeCode::from_bits(0b1111_1010);
/// assert_eq!(code, ControlModeCode::VELOCITY);
/// assert!(code.has_velocity());
/// assert!(!code.has_position());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlModeCode(u8);

impl ControlModeCode {
    pub const MASK: u8 = 0b111;
    pub const DISABLED: Self = Self(0b000);
    pub const POSITION: Self = Self(0b001);
    pub const VELOCITY: Self = Self(0b010);
    pub const ACCELERATION: Self = Self(0b100);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn has_position(self) -> bool {
        self.0 & Self::POSITION.0 != 0
    }

    pub const fn has_velocity(self) -> bool {
        self.0 & Self::VELOCITY.0 != 0
    }

    pub const fn has_acceleration(self) -> bool {
        self.0 & Self::ACCELERATION.0 != 0
    }
}

/// Per-axis control modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modes {
    pub x: AxisMode,
    pub y: AxisMode,
    pub z: AxisMode,
    pub roll: AxisMode,
    pub pitch: AxisMode,
    pub yaw: AxisMode,
}

/// Legacy per-axis mode codes, mirrored for older consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyModes {
    pub x: ControlModeCode,
    pub y: ControlModeCode,
    pub z: ControlModeCode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyFlags {
    /// Request an emergency stop.
    pub set: bool,
    /// Clear a pending emergency stop.
    pub reset: bool,
}

/// Target command for the flight controller.
///
/// The term arrays hold `{position, velocity, acceleration}` for `x`, `y`
/// and `z`, and `{angle, rate}` for `yaw`. Which terms are meaningful is
/// decided by `mode` / `legacy_mode`.
///
/// # Examples
/// ```
/// use commander_core::Setpoint;
///
/// let setpoint = Setpoint::neutral();
/// assert!(setpoint.is_neutral());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Setpoint {
    pub mode: Modes,
    pub legacy_mode: LegacyModes,
    pub x: [f32; 3],
    pub y: [f32; 3],
    pub z: [f32; 3],
    pub yaw: [f32; 2],
    pub velocity: Vector3,
    pub attitude_rate: Attitude,
    pub emergency: EmergencyFlags,
}

impl Setpoint {
    /// The stop command: motors off, all axes disabled.
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    /// Reset in place to the neutral value.
    pub fn neutralize(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisMode, ControlModeCode, Setpoint};

    #[test]
    fn neutral_setpoint_is_all_zero() {
        let setpoint = Setpoint::neutral();
        assert_eq!(setpoint.mode.x, AxisMode::Disable);
        assert_eq!(setpoint.mode.yaw, AxisMode::Disable);
        assert_eq!(setpoint.legacy_mode.z, ControlModeCode::DISABLED);
        assert_eq!(setpoint.x, [0.0; 3]);
        assert_eq!(setpoint.yaw, [0.0; 2]);
        assert!(!setpoint.emergency.set);
        assert!(!setpoint.emergency.reset);
    }

    #[test]
    fn neutralize_clears_previous_command() {
        let mut setpoint = Setpoint::neutral();
        setpoint.mode.x = AxisMode::Velocity;
        setpoint.y[2] = 4.0;
        setpoint.emergency.set = true;
        assert!(!setpoint.is_neutral());

        setpoint.neutralize();
        assert!(setpoint.is_neutral());
    }

    #[test]
    fn control_mode_code_masks_to_three_bits() {
        for bits in 0..=u8::MAX {
            assert_eq!(ControlModeCode::from_bits(bits).bits(), bits & 0b111);
        }
        let all = ControlModeCode::from_bits(0b111);
        assert!(all.has_position() && all.has_velocity() && all.has_acceleration());
    }

    #[test]
    fn setpoint_serializes_modes_in_snake_case() {
        let mut setpoint = Setpoint::neutral();
        setpoint.mode.z = AxisMode::Absolute;
        setpoint.legacy_mode.z = ControlModeCode::POSITION;

        let value = serde_json::to_value(setpoint).expect("setpoint json");
        assert_eq!(value["mode"]["z"], "absolute");
        assert_eq!(value["mode"]["x"], "disable");
        assert_eq!(value["legacy_mode"]["z"], 1);
    }
}
