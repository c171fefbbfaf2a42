//! Decoder diagnostics.
//!
//! The full-control decoder reports a packet counter and the first term of
//! each translational axis. The sink is passed by `&mut` into every decode
//! call, so there is exactly one writer at a time; readers take a copy of
//! [`Diagnostics`] between calls.

use serde::{Deserialize, Serialize};

/// Receiver for the values published by the decoders.
pub trait DiagnosticsSink {
    /// Called once per successfully decoded full-control packet with the
    /// first term of the x, y and z axes.
    fn record_full_control(&mut self, x: f32, y: f32, z: f32);
}

/// Latest decoder diagnostics.
///
/// # Examples
/// ```
/// use commander_core::{Diagnostics, DiagnosticsSink};
///
/// let mut diagnostics = Diagnostics::default();
/// diagnostics.record_full_control(1.0, 2.0, 3.0);
/// assert_eq!(diagnostics.packets_received, 1);
/// assert_eq!(diagnostics.last_z, 3.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Full-control packets decoded so far (wraps at `u32::MAX`).
    pub packets_received: u32,
    pub last_x: f32,
    pub last_y: f32,
    pub last_z: f32,
}

impl DiagnosticsSink for Diagnostics {
    fn record_full_control(&mut self, x: f32, y: f32, z: f32) {
        self.last_x = x;
        self.last_y = y;
        self.last_z = z;
        self.packets_received = self.packets_received.wrapping_add(1);
    }
}

/// Sink that drops everything, for callers without telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl DiagnosticsSink for NoDiagnostics {
    fn record_full_control(&mut self, _x: f32, _y: f32, _z: f32) {}
}
