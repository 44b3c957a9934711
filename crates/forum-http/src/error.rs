//! Error handling utilities for the HTTP endpoint

use forum_core::error::EndpointError;
use reqwest::Error as ReqwestError;

/// Convert a reqwest error to an EndpointError.
///
/// Body decode failures keep their own class; everything else,
/// timeouts included, is a transport failure.
pub fn map_transport_error(e: ReqwestError) -> EndpointError {
    if e.is_decode() {
        EndpointError::Decode(e.to_string())
    } else {
        EndpointError::Transport(e.to_string())
    }
}
