//! Commander core library: generic commander packet decoding.
//!
//! A generic commander packet is a one-byte type tag followed by a
//! type-specific payload. The dispatcher resolves the tag, checks the payload
//! length, and fills a neutral [`Setpoint`] through the matching decoder
//! (layout/reader/parser). Unknown or unregistered tags leave the setpoint
//! neutral, which is the stop command. Decoding is pure; file access is
//! isolated in `source`, and `replay` aggregates a recorded packet log into a
//! deterministic [`DecodeReport`].
//!
//! Invariants:
//! - Every decode starts from the neutral setpoint.
//! - A payload whose length differs from its type's layout is rejected before
//!   any field is written.
//! - Diagnostics are only written through the sink passed into the call.
//!
//! # Examples
//! ```
//! use commander_core::{AxisMode, Diagnostics, decode_setpoint};
//!
//! let mut packet = vec![1u8];
//! for value in [1.0f32, 2.0, 3.0, 0.5] {
//!     packet.extend_from_slice(&value.to_le_bytes());
//! }
//!
//! let mut diagnostics = Diagnostics::default();
//! let setpoint = decode_setpoint(&packet, &mut diagnostics)?;
//! assert_eq!(setpoint.mode.x, AxisMode::Velocity);
//! assert_eq!(setpoint.attitude_rate.yaw, 0.5);
//! # Ok::<(), commander_core::DecodeError>(())
//! ```

use serde::{Deserialize, Serialize};

mod diagnostics;
mod dispatch;
mod protocols;
mod replay;
mod setpoint;
mod source;

pub use diagnostics::{Diagnostics, DiagnosticsSink, NoDiagnostics};
pub use dispatch::{Dispatch, PayloadDecoder, decode_setpoint, decode_setpoint_into, packet_tag};
pub use protocols::common::half_to_f32;
pub use protocols::generic::{
    DecodeError, FullControl, FullControlHeader, PacketType, VelocityWorld, layout,
    parse_full_control, parse_velocity_world,
};
pub use replay::{MismatchPolicy, ReplayError, replay_packet_file, replay_source};
pub use setpoint::{
    Attitude, AxisMode, ControlModeCode, EmergencyFlags, LegacyModes, Modes, Setpoint, Vector3,
};
pub use source::{HexError, HexLogSource, PacketEvent, PacketSource, SourceError, parse_hex_packet};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Result of replaying a packet log, in input order.
///
/// # Examples
/// ```
/// use commander_core::make_stub_report;
///
/// let report = make_stub_report("packets.hex", 123);
/// assert_eq!(report.report_version, commander_core::REPORT_VERSION);
/// assert!(report.packets.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeReport {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Input log metadata.
    pub input: InputInfo,
    /// Packet counts per outcome.
    pub summary: ReplaySummary,
    /// One record per packet line.
    pub packets: Vec<PacketRecord>,
    /// Diagnostics after the last packet.
    pub diagnostics: Diagnostics,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "commander").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input log metadata embedded in reports.
///
/// # Examples
/// ```
/// use commander_core::InputInfo;
///
/// let input = InputInfo {
///     path: "packets.hex".to_string(),
///     bytes: 1024,
/// };
/// assert_eq!(input.bytes, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the replay.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySummary {
    /// Packets read from the log.
    pub packets_total: u64,
    /// Packets handled by a registered decoder (stop included).
    pub decoded: u64,
    /// Unknown or unregistered tags.
    pub neutral_fallbacks: u64,
    /// Decode errors replaced by the neutral setpoint.
    pub rejected: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketOutcome {
    Decoded,
    Neutral,
    Rejected,
}

/// Decode result for one packet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketRecord {
    /// 1-based line in the packet log.
    pub line: usize,
    /// Type tag, absent only for an empty packet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<u8>,
    /// Known packet type for the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_type: Option<PacketType>,
    pub outcome: PacketOutcome,
    pub setpoint: Setpoint,
    /// Decode error message for rejected packets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PacketRecord {
    pub fn new(
        line: usize,
        tag: Option<u8>,
        packet_type: Option<PacketType>,
        outcome: PacketOutcome,
        setpoint: Setpoint,
        error: Option<String>,
    ) -> Self {
        Self {
            line,
            tag,
            packet_type,
            outcome,
            setpoint,
            error,
        }
    }
}

/// Build a report with base fields filled and no packets.
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> DecodeReport {
    DecodeReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "commander".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        summary: ReplaySummary::default(),
        packets: vec![],
        diagnostics: Diagnostics::default(),
    }
}
