//! Test fixtures and data generators
//!
//! Markup snapshots for the states a rendered reaction control can
//! start in.

use std::sync::atomic::{AtomicU64, Ordering};

use forum_core::entities::ButtonMarkup;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Get a unique post id for test data
pub fn unique_post_id() -> String {
    format!("{}", 1000 + unique_suffix())
}

/// Markup for a control the viewer has not reacted to
pub fn reaction_markup(post_id: &str, count: &str) -> ButtonMarkup {
    ButtonMarkup {
        post_id: Some(post_id.to_string()),
        classes: vec!["reaction-btn".to_string()],
        icon_class: Some("bi-heart".to_string()),
        count_text: Some(count.to_string()),
    }
}

/// Markup for a control the viewer has already reacted to
pub fn active_markup(post_id: &str, count: &str) -> ButtonMarkup {
    ButtonMarkup {
        post_id: Some(post_id.to_string()),
        classes: vec!["reaction-btn".to_string(), "active".to_string()],
        icon_class: Some("bi-heart-fill".to_string()),
        count_text: Some(count.to_string()),
    }
}

/// Markup without a post id attribute
pub fn inert_markup(count: &str) -> ButtonMarkup {
    ButtonMarkup {
        post_id: None,
        classes: vec!["reaction-btn".to_string()],
        icon_class: Some("bi-heart".to_string()),
        count_text: Some(count.to_string()),
    }
}

/// Markup without icon or count children
pub fn bare_markup(post_id: &str) -> ButtonMarkup {
    ButtonMarkup {
        post_id: Some(post_id.to_string()),
        classes: vec!["reaction-btn".to_string()],
        icon_class: None,
        count_text: None,
    }
}
