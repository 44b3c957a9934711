//! Reaction controls
//!
//! Per-button state records derived from rendered markup.

mod control;

pub use control::{Control, ControlId, ControlSnapshot, Phase};
