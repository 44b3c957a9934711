//! Domain entities - core records of the reaction component

mod button;
mod markup;
mod reaction;

pub use button::ReactionButton;
pub use markup::{ACTIVE_CLASS, ButtonMarkup, DerivedButton};
pub use reaction::{ReactionAction, ReactionUpdate};
