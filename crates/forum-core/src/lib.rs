//! # forum-core
//!
//! Domain layer for the forum reaction component: entities, value objects,
//! the endpoint port, and the error taxonomy. This crate has zero
//! dependencies on transport or runtime infrastructure.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ACTIVE_CLASS, ButtonMarkup, DerivedButton, ReactionAction, ReactionButton, ReactionUpdate,
};
pub use error::EndpointError;
pub use traits::{EndpointResult, ReactionEndpoint};
pub use value_objects::{IconState, PostId, PostIdParseError};
