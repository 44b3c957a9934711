//! # forum-http
//!
//! Transport layer implementing the reaction endpoint port over HTTP via reqwest.
//!
//! ## Overview
//!
//! This crate provides the one real server boundary of the client:
//!
//! - `HttpReactionEndpoint` implementing `forum_core::ReactionEndpoint`
//! - The wire payload model of the toggle response
//! - Mapping of transport failures onto the domain error taxonomy
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_common::config::ClientConfig;
//! use forum_http::HttpReactionEndpoint;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let endpoint = HttpReactionEndpoint::new(&config.forum)?;
//!
//!     // Hand the endpoint to a ReactionToggle...
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod payloads;

// Re-export commonly used types
pub use client::HttpReactionEndpoint;
pub use error::map_transport_error;
pub use payloads::ReactPayload;
