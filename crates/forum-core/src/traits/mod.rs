//! Ports - interfaces the interaction layer depends on

mod endpoint;

pub use endpoint::{EndpointResult, ReactionEndpoint};
