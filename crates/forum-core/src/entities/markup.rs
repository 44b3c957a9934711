//! Button markup - snapshot of one server-rendered reaction control
//!
//! The page derives every state record from markup like:
//!
//! ```html
//! <button class="reaction-btn active" data-post-id="123">
//!     <i class="bi-heart-fill"></i>
//!     <span class="reaction-count">3</span>
//! </button>
//! ```

use crate::entities::ReactionButton;
use crate::value_objects::{IconState, PostId};

/// Class that marks an already-reacted control in rendered markup
pub const ACTIVE_CLASS: &str = "active";

/// Snapshot of one rendered reaction control: its class list, its
/// `data-post-id` attribute, and the text/class of the optional count
/// and icon children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonMarkup {
    pub post_id: Option<String>,
    pub classes: Vec<String>,
    pub icon_class: Option<String>,
    pub count_text: Option<String>,
}

impl ButtonMarkup {
    /// Derive the state record plus the presentation classes the
    /// component leaves untouched.
    ///
    /// The `active` marker class is the single source of truth for
    /// state; an icon child contributes presence only, with its glyph
    /// set in lockstep with the marker. Count text that does not parse
    /// as a non-negative integer derives as "no count displayed".
    pub fn derive(&self) -> DerivedButton {
        let post_id = PostId::from_attribute(self.post_id.as_deref());
        let active = self.classes.iter().any(|c| c == ACTIVE_CLASS);
        let icon = self
            .icon_class
            .as_deref()
            .map(|_| IconState::for_active(active));
        let count = self.count_text.as_deref().and_then(parse_count);
        let base_classes = self
            .classes
            .iter()
            .filter(|c| c.as_str() != ACTIVE_CLASS)
            .cloned()
            .collect();

        DerivedButton {
            button: ReactionButton::new(post_id, active, icon, count),
            base_classes,
        }
    }
}

/// Result of deriving a markup snapshot
#[derive(Debug, Clone)]
pub struct DerivedButton {
    /// The state record the component owns from here on
    pub button: ReactionButton,
    /// Presentation classes with the `active` marker stripped
    pub base_classes: Vec<String>,
}

fn parse_count(text: &str) -> Option<u64> {
    text.trim().parse().ok()
}
