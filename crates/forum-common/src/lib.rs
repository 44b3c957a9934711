//! # forum-common
//!
//! Shared utilities for the forum client: configuration and telemetry.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{AppSettings, ClientConfig, ConfigError, Environment, ForumConfig};
pub use telemetry::{
    TracingConfig, TracingError, init_tracing, init_tracing_with_config, try_init_tracing,
    try_init_tracing_with_config,
};
