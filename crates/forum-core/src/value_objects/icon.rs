//! Icon state - the glyph a reaction button displays

use std::fmt;

/// Visual state of the reaction icon.
///
/// Purely cosmetic and kept in lockstep with the button's active state;
/// the two are always assigned together during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconState {
    /// Outline heart, shown while the viewer has not reacted
    #[default]
    Empty,
    /// Filled heart, shown while the viewer's reaction is recorded
    Filled,
}

impl IconState {
    /// Class rendered for the outline glyph
    pub const EMPTY_CLASS: &'static str = "bi-heart";

    /// Class rendered for the filled glyph
    pub const FILLED_CLASS: &'static str = "bi-heart-fill";

    /// The CSS class this state renders as
    #[inline]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Empty => Self::EMPTY_CLASS,
            Self::Filled => Self::FILLED_CLASS,
        }
    }

    /// State implied by whether the viewer's reaction is active
    #[inline]
    pub const fn for_active(active: bool) -> Self {
        if active {
            Self::Filled
        } else {
            Self::Empty
        }
    }

    /// Check if this is the filled glyph
    #[inline]
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled)
    }
}

impl fmt::Display for IconState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
