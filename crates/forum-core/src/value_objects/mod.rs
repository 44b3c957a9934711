//! Value objects - immutable types that represent domain concepts

mod icon;
mod post_id;

pub use icon::IconState;
pub use post_id::{PostId, PostIdParseError};
