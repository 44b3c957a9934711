//! Wire payloads for the forum reaction endpoint

use serde::Deserialize;

use forum_core::entities::{ReactionAction, ReactionUpdate};
use forum_core::error::EndpointError;
use forum_core::traits::EndpointResult;

/// Response body of the reaction toggle endpoint:
/// `{ "success": true, "action": "added", "count": 4 }`.
///
/// The server sends all three fields on a confirmed toggle; `action`
/// and `count` stay optional here so a bare `{"success": false}` still
/// decodes.
#[derive(Debug, Clone, Deserialize)]
pub struct ReactPayload {
    pub success: bool,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl ReactPayload {
    /// Convert into the domain update, honoring the success flag.
    ///
    /// A confirmed toggle without a count is malformed; a missing or
    /// unrecognized action resolves to a removal, the same way the page
    /// treats any action other than "added".
    pub fn into_update(self) -> EndpointResult<ReactionUpdate> {
        if !self.success {
            return Err(EndpointError::Rejected);
        }

        let count = self
            .count
            .ok_or_else(|| EndpointError::Decode("response missing count".to_string()))?;
        let action = ReactionAction::from_wire(self.action.as_deref());

        Ok(ReactionUpdate::new(action, count))
    }
}
