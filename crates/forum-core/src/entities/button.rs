//! Reaction button entity - client-side record for one rendered control

use crate::entities::ReactionUpdate;
use crate::value_objects::{IconState, PostId};

/// Client-side state of one reaction button.
///
/// `active` and `icon` move together: both are assigned from the
/// server-reported action inside [`apply`](Self::apply) and nowhere
/// else. `count` mirrors the server tally and is never computed locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionButton {
    /// Target post, absent when the markup carried no usable identifier
    pub post_id: Option<PostId>,
    /// Whether the viewer's reaction is currently recorded
    pub active: bool,
    /// Displayed glyph, absent when the markup has no icon child
    pub icon: Option<IconState>,
    /// Displayed tally, absent when the markup has no count child
    pub count: Option<u64>,
}

impl ReactionButton {
    /// Create a new ReactionButton
    pub fn new(
        post_id: Option<PostId>,
        active: bool,
        icon: Option<IconState>,
        count: Option<u64>,
    ) -> Self {
        Self {
            post_id,
            active,
            icon,
            count,
        }
    }

    /// A button without a post identifier never issues a request
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.post_id.is_none()
    }

    /// Reconcile displayed state with a confirmed server update.
    ///
    /// The single mutation point for `active`, `icon`, and `count`.
    /// Active state and glyph both follow the server's action; the tally
    /// is overwritten with the server's value. Fields the markup never
    /// displayed stay absent.
    pub fn apply(&mut self, update: &ReactionUpdate) {
        self.active = update.action.is_added();
        if self.icon.is_some() {
            self.icon = Some(IconState::for_active(self.active));
        }
        if self.count.is_some() {
            self.count = Some(update.count);
        }
    }

    /// Invariant: a displayed icon is filled exactly while active
    pub fn icon_matches_active(&self) -> bool {
        match self.icon {
            Some(icon) => icon.is_filled() == self.active,
            None => true,
        }
    }
}
