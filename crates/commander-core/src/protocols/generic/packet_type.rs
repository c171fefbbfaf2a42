use std::fmt;

use serde::{Deserialize, Serialize};

use super::layout;

/// Packet types known to the generic commander.
///
/// # Examples
/// ```
/// use commander_core::PacketType;
///
/// assert_eq!(PacketType::from_tag(1), Some(PacketType::VelocityWorld));
/// assert_eq!(PacketType::from_tag(99), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketType {
    Stop,
    VelocityWorld,
    Rate,
    FullControl,
}

impl PacketType {
    /// Number of enumerated types; valid tags are `0..COUNT`.
    pub const COUNT: usize = 4;

    pub const ALL: [PacketType; Self::COUNT] = [
        PacketType::Stop,
        PacketType::VelocityWorld,
        PacketType::Rate,
        PacketType::FullControl,
    ];

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            layout::TAG_STOP => Some(PacketType::Stop),
            layout::TAG_VELOCITY_WORLD => Some(PacketType::VelocityWorld),
            layout::TAG_RATE => Some(PacketType::Rate),
            layout::TAG_FULL_CONTROL => Some(PacketType::FullControl),
            _ => None,
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            PacketType::Stop => layout::TAG_STOP,
            PacketType::VelocityWorld => layout::TAG_VELOCITY_WORLD,
            PacketType::Rate => layout::TAG_RATE,
            PacketType::FullControl => layout::TAG_FULL_CONTROL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PacketType::Stop => "stop",
            PacketType::VelocityWorld => "velocity_world",
            PacketType::Rate => "rate",
            PacketType::FullControl => "full_control",
        }
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
