//! Reaction update - what the server reports back for a confirmed toggle

use std::fmt;

/// Direction the server resolved a toggle into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionAction {
    /// The viewer's reaction was recorded
    Added,
    /// The viewer's reaction was withdrawn
    Removed,
}

impl ReactionAction {
    /// Wire value the server sends for a recorded reaction
    pub const ADDED_WIRE: &'static str = "added";

    /// Interpret the wire `action` field.
    ///
    /// Only the exact string "added" activates; any other value,
    /// including an absent field, resolves to Removed.
    pub fn from_wire(action: Option<&str>) -> Self {
        match action {
            Some(Self::ADDED_WIRE) => Self::Added,
            _ => Self::Removed,
        }
    }

    /// Check if this action records a reaction
    #[inline]
    pub const fn is_added(self) -> bool {
        matches!(self, Self::Added)
    }

    /// Wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for ReactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authoritative result of one accepted toggle request.
///
/// `count` is the server's tally after the toggle; the client displays
/// it verbatim and never derives its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionUpdate {
    pub action: ReactionAction,
    pub count: u64,
}

impl ReactionUpdate {
    /// Create a new ReactionUpdate
    pub const fn new(action: ReactionAction, count: u64) -> Self {
        Self { action, count }
    }
}
