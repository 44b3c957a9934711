//! Individual reaction control
//!
//! Represents a single rendered reaction button and its state.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use forum_core::entities::{ACTIVE_CLASS, ButtonMarkup, ReactionButton, ReactionUpdate};
use forum_core::value_objects::PostId;

/// Identity of one rendered control on the page.
///
/// Assigned at registration; two controls targeting the same post keep
/// distinct identities and fully independent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

impl ControlId {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner u64 value
    #[inline]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request phase of one control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    /// No request in flight
    Idle = 0,
    /// A toggle request is in flight
    Requesting = 1,
}

impl Phase {
    fn from_u8(raw: u8) -> Self {
        if raw == Phase::Requesting as u8 {
            Self::Requesting
        } else {
            Self::Idle
        }
    }
}

/// A single reaction control.
///
/// The displayed state lives behind a lock and is written only by
/// reconciliation; the request phase is an atomic so one cycle at a
/// time can be admitted with a compare-and-swap.
pub struct Control {
    /// Identity on the page
    id: ControlId,

    /// Presentation classes with the active marker stripped
    base_classes: Vec<String>,

    /// Current request phase
    phase: AtomicU8,

    /// Displayed state, mutated only by reconciliation
    button: RwLock<ReactionButton>,
}

impl Control {
    /// Derive a control from its rendered markup
    pub(crate) fn from_markup(id: ControlId, markup: &ButtonMarkup) -> Arc<Self> {
        let derived = markup.derive();
        Arc::new(Self {
            id,
            base_classes: derived.base_classes,
            phase: AtomicU8::new(Phase::Idle as u8),
            button: RwLock::new(derived.button),
        })
    }

    /// Get the control ID
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// Target post, if the markup carried one
    pub fn post_id(&self) -> Option<PostId> {
        self.button.read().post_id.clone()
    }

    /// Get the current request phase
    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::SeqCst))
    }

    /// Admit one toggle cycle, moving Idle to Requesting.
    ///
    /// Returns false while another cycle is in flight; the caller must
    /// not issue a request in that case.
    pub(crate) fn begin_cycle(&self) -> bool {
        self.phase
            .compare_exchange(
                Phase::Idle as u8,
                Phase::Requesting as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
    }

    /// Apply a confirmed update and return the control to Idle
    pub(crate) fn finish_reconciled(&self, update: &ReactionUpdate) {
        self.button.write().apply(update);
        self.phase.store(Phase::Idle as u8, Ordering::SeqCst);
    }

    /// Return the control to Idle leaving displayed state untouched
    pub(crate) fn finish_unchanged(&self) {
        self.phase.store(Phase::Idle as u8, Ordering::SeqCst);
    }

    /// Read-only view of the displayed state
    pub fn snapshot(&self) -> ControlSnapshot {
        let button = self.button.read();
        let mut class_list = self.base_classes.clone();
        if button.active {
            class_list.push(ACTIVE_CLASS.to_string());
        }

        ControlSnapshot {
            post_id: button.post_id.clone(),
            active: button.active,
            count: button.count,
            icon_class: button.icon.map(|i| i.class_name().to_string()),
            class_list,
            phase: self.phase(),
        }
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("id", &self.id)
            .field("phase", &self.phase())
            .finish()
    }
}

/// Read-only view of one control, shaped for hosts and tests:
/// everything a renderer would need to paint the button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSnapshot {
    pub post_id: Option<PostId>,
    pub active: bool,
    pub count: Option<u64>,
    pub icon_class: Option<String>,
    pub class_list: Vec<String>,
    pub phase: Phase,
}

impl ControlSnapshot {
    /// Text a count sub-element would render, if the button has one
    pub fn count_text(&self) -> Option<String> {
        self.count.map(|c| c.to_string())
    }

    /// Check if the rendered class list contains a class
    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|c| c == class)
    }
}
