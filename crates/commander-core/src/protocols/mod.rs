//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets, lengths and bit positions (source of truth)
//! - `reader`: bounds-checked little-endian field access
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; the packet source and replay layers
//! handle file access and aggregation.

pub(crate) mod common;
pub mod generic;
