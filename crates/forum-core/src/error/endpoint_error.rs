//! Endpoint errors - failure classes for the reaction endpoint port

use thiserror::Error;

/// Ways a toggle request can fail.
///
/// Every variant is terminal for its activation cycle: the interaction
/// layer logs it and leaves the displayed state untouched. None of them
/// reach the viewer.
#[derive(Debug, Error)]
pub enum EndpointError {
    // =========================================================================
    // Network Errors
    // =========================================================================
    #[error("Transport error: {0}")]
    Transport(String),

    // =========================================================================
    // Response Errors
    // =========================================================================
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Toggle rejected by server")]
    Rejected,
}

impl EndpointError {
    /// Get an error code string for structured logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Rejected => "TOGGLE_REJECTED",
        }
    }

    /// Check if the request never produced a readable response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if the response body was not the expected payload
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Check if the server answered but declined the toggle
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}
