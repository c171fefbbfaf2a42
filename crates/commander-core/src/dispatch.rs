//! Packet dispatcher: tag resolution and decoder invocation.

use log::{debug, trace};

use crate::diagnostics::DiagnosticsSink;
use crate::protocols::generic::{
    DecodeError, PacketType, decode_full_control, decode_stop, decode_velocity_world, layout,
};
use crate::setpoint::Setpoint;

/// Decoder registered for a packet type. The payload length is the slice length.
pub type PayloadDecoder =
    fn(&[u8], &mut Setpoint, &mut dyn DiagnosticsSink) -> Result<(), DecodeError>;

impl PacketType {
    /// Decoder registered for this type, if any.
    ///
    /// `Rate` is enumerated but has no decoder: such packets produce the
    /// neutral setpoint.
    pub fn decoder(self) -> Option<PayloadDecoder> {
        match self {
            PacketType::Stop => Some(decode_stop),
            PacketType::VelocityWorld => Some(decode_velocity_world),
            PacketType::Rate => None,
            PacketType::FullControl => Some(decode_full_control),
        }
    }
}

/// How a packet was handled by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A registered decoder ran.
    Decoded(PacketType),
    /// Unknown tag or no decoder registered; the setpoint stays neutral.
    Neutral { tag: u8 },
}

/// Decode a raw packet into a fresh setpoint.
///
/// Unknown or unregistered tags yield the neutral setpoint. A registered type
/// whose payload does not have its exact length yields
/// [`DecodeError::PayloadLengthMismatch`].
///
/// # Examples
/// ```
/// use commander_core::{Diagnostics, decode_setpoint};
///
/// let mut diagnostics = Diagnostics::default();
/// let setpoint = decode_setpoint(&[99, 1, 2, 3], &mut diagnostics)?;
/// assert!(setpoint.is_neutral());
/// # Ok::<(), commander_core::DecodeError>(())
/// ```
pub fn decode_setpoint(
    packet: &[u8],
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<Setpoint, DecodeError> {
    let mut setpoint = Setpoint::neutral();
    decode_setpoint_into(&mut setpoint, packet, diagnostics)?;
    Ok(setpoint)
}

/// Decode into a caller-owned setpoint, neutralizing it first.
///
/// On error the setpoint is left neutral.
pub fn decode_setpoint_into(
    setpoint: &mut Setpoint,
    packet: &[u8],
    diagnostics: &mut dyn DiagnosticsSink,
) -> Result<Dispatch, DecodeError> {
    setpoint.neutralize();

    let (&tag, payload) = packet.split_first().ok_or(DecodeError::EmptyPacket)?;
    trace!("generic commander packet: tag {tag}, payload {} bytes", payload.len());

    let Some((packet_type, decode)) =
        PacketType::from_tag(tag).and_then(|t| t.decoder().map(|decode| (t, decode)))
    else {
        debug!("no decoder for packet tag {tag}, keeping neutral setpoint");
        return Ok(Dispatch::Neutral { tag });
    };

    if let Err(err) = decode(payload, setpoint, diagnostics) {
        setpoint.neutralize();
        return Err(err);
    }
    Ok(Dispatch::Decoded(packet_type))
}

/// Tag of a raw packet, if present.
pub fn packet_tag(packet: &[u8]) -> Option<u8> {
    packet.get(layout::TYPE_TAG_OFFSET).copied()
}
