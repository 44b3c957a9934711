//! Endpoint port - the server boundary for reaction toggles
//!
//! The interaction layer defines what it needs from the forum server;
//! the transport layer provides the implementation.

use async_trait::async_trait;

use crate::entities::ReactionUpdate;
use crate::error::EndpointError;
use crate::value_objects::PostId;

/// Result type for endpoint operations
pub type EndpointResult<T> = Result<T, EndpointError>;

#[async_trait]
pub trait ReactionEndpoint: Send + Sync {
    /// Toggle the viewer's reaction on a post.
    ///
    /// Exactly one server round trip per call. A confirmed toggle
    /// resolves to the authoritative action and count; every failure
    /// maps onto one [`EndpointError`] class.
    async fn toggle_reaction(&self, post_id: &PostId) -> EndpointResult<ReactionUpdate>;
}
