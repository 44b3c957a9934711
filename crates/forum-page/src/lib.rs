//! # forum-page
//!
//! Interaction layer for the forum reaction component.
//!
//! ## Overview
//!
//! A server-rendered forum page carries one reaction button per post.
//! This crate owns those buttons once the page is loaded:
//!
//! - `ReactionPage` derives an explicit state record per rendered
//!   control and keys it by control identity
//! - `ReactionToggle` consumes activations, dispatches at most one
//!   toggle request per control at a time, and reconciles displayed
//!   state with the server's confirmed action and count
//!
//! Displayed state never changes optimistically: a failed or rejected
//! request is logged and leaves the button exactly as it was.

pub mod controls;
pub mod page;
pub mod toggle;

// Re-export commonly used types at crate root
pub use controls::{Control, ControlId, ControlSnapshot, Phase};
pub use page::ReactionPage;
pub use toggle::{Activation, ActivationOutcome, CycleOutcome, IgnoreReason, ReactionToggle};
