//! Integration test utilities for the forum reaction client
//!
//! This crate provides a scriptable stub forum and markup fixtures for
//! running the toggle stack end to end over real HTTP.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
