//! Reaction page
//!
//! Owns every reaction control derived from one page load, using DashMap
//! for thread-safe access keyed by control identity.

use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use forum_core::entities::ButtonMarkup;

use crate::controls::{Control, ControlId, ControlSnapshot};

/// All reaction controls of one page view.
///
/// Re-derived from rendered markup on every page load; nothing here
/// survives navigation. The page itself exposes no state mutation
/// beyond registration, so every display change flows through the
/// toggle's reconciliation path.
pub struct ReactionPage {
    /// Page view ID for log correlation
    view_id: String,

    /// Controls by ID
    controls: DashMap<ControlId, Arc<Control>>,

    /// Next control ID
    next_control_id: AtomicU64,
}

impl ReactionPage {
    /// Create an empty page view
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_id: Uuid::new_v4().to_string(),
            controls: DashMap::new(),
            next_control_id: AtomicU64::new(1),
        }
    }

    /// Create an empty page view wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Derive one control per markup snapshot, in document order
    #[must_use]
    pub fn load(markups: &[ButtonMarkup]) -> Arc<Self> {
        let page = Self::new_shared();
        for markup in markups {
            page.register(markup);
        }

        tracing::debug!(
            view_id = %page.view_id,
            controls = page.control_count(),
            "Page view loaded"
        );

        page
    }

    /// Get the page view ID
    pub fn view_id(&self) -> &str {
        &self.view_id
    }

    /// Register one control from its rendered markup
    pub fn register(&self, markup: &ButtonMarkup) -> ControlId {
        let id = ControlId::new(self.next_control_id.fetch_add(1, Ordering::SeqCst));
        let control = Control::from_markup(id, markup);
        let inert = control.post_id().is_none();

        self.controls.insert(id, control);

        tracing::debug!(
            view_id = %self.view_id,
            control_id = %id,
            inert = inert,
            "Control registered"
        );

        id
    }

    /// Get a control by ID
    pub fn get_control(&self, id: ControlId) -> Option<Arc<Control>> {
        self.controls.get(&id).map(|r| r.clone())
    }

    /// Read-only view of one control
    pub fn snapshot(&self, id: ControlId) -> Option<ControlSnapshot> {
        self.controls.get(&id).map(|c| c.snapshot())
    }

    /// Read-only views of every control, in registration order
    pub fn snapshots(&self) -> Vec<(ControlId, ControlSnapshot)> {
        let mut all: Vec<_> = self
            .controls
            .iter()
            .map(|r| (*r.key(), r.snapshot()))
            .collect();
        all.sort_by_key(|(id, _)| *id);
        all
    }

    /// Get the number of controls on the page
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// Check if a control exists
    pub fn has_control(&self, id: ControlId) -> bool {
        self.controls.contains_key(&id)
    }
}

impl Default for ReactionPage {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReactionPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionPage")
            .field("view_id", &self.view_id)
            .field("controls", &self.controls.len())
            .finish()
    }
}
