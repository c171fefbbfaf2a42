use std::path::Path;

use log::warn;
use thiserror::Error;

use crate::diagnostics::Diagnostics;
use crate::dispatch::{Dispatch, decode_setpoint_into, packet_tag};
use crate::protocols::generic::{DecodeError, PacketType};
use crate::setpoint::Setpoint;
use crate::source::{HexLogSource, PacketEvent, PacketSource, SourceError};
use crate::{
    DecodeReport, InputInfo, PacketOutcome, PacketRecord, ReplaySummary, make_stub_report,
};

/// What the surrounding system does with a packet that fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Stop processing at the first decode error.
    Abort,
    /// Substitute the neutral setpoint and keep going.
    #[default]
    Neutral,
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("decode failed on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },
}

pub fn replay_packet_file(
    path: &Path,
    policy: MismatchPolicy,
) -> Result<DecodeReport, ReplayError> {
    let input = InputInfo {
        path: path.display().to_string(),
        bytes: path.metadata()?.len(),
    };
    let source = HexLogSource::open(path)?;
    replay_source(input, source, policy)
}

/// Replay every packet of `source`; `input` is copied into the report as is.
pub fn replay_source<S: PacketSource>(
    input: InputInfo,
    mut source: S,
    policy: MismatchPolicy,
) -> Result<DecodeReport, ReplayError> {
    let mut summary = ReplaySummary::default();
    let mut diagnostics = Diagnostics::default();
    let mut packets = Vec::new();
    let mut setpoint = Setpoint::neutral();

    while let Some(PacketEvent { line, data }) = source.next_packet()? {
        summary.packets_total += 1;
        let tag = packet_tag(&data);
        let packet_type = tag.and_then(PacketType::from_tag);

        let record = match decode_setpoint_into(&mut setpoint, &data, &mut diagnostics) {
            Ok(Dispatch::Decoded(_)) => {
                summary.decoded += 1;
                PacketRecord::new(line, tag, packet_type, PacketOutcome::Decoded, setpoint, None)
            }
            Ok(Dispatch::Neutral { .. }) => {
                summary.neutral_fallbacks += 1;
                PacketRecord::new(line, tag, packet_type, PacketOutcome::Neutral, setpoint, None)
            }
            Err(err) => {
                if policy == MismatchPolicy::Abort {
                    return Err(ReplayError::Decode { line, source: err });
                }
                warn!("line {line}: {err}; substituting neutral setpoint");
                summary.rejected += 1;
                PacketRecord::new(
                    line,
                    tag,
                    packet_type,
                    PacketOutcome::Rejected,
                    setpoint,
                    Some(err.to_string()),
                )
            }
        };
        packets.push(record);
    }

    let mut report = make_stub_report(&input.path, input.bytes);
    report.input = input;
    report.summary = summary;
    report.packets = packets;
    report.diagnostics = diagnostics;
    Ok(report)
}
