//! Generic commander packet decoding.
//!
//! A packet is a one-byte type tag followed by a type-specific payload of at
//! most 29 bytes. Each registered type has a fixed payload length that is
//! checked before any field is read, so a malformed packet never produces a
//! partially written setpoint.
//!
//! Header fields are extracted with mask-and-shift from little-endian words;
//! full-control terms are binary16 values widened through
//! `common::half_to_f32`. Offsets live in `layout`, field access in `reader`.

pub mod error;
pub mod layout;
pub mod packet_type;
pub mod parser;
pub mod reader;

pub use error::DecodeError;
pub use packet_type::PacketType;
pub use parser::{
    FullControl, FullControlHeader, VelocityWorld, decode_full_control, decode_stop,
    decode_velocity_world, parse_full_control, parse_velocity_world,
};
