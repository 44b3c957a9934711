//! Reaction toggle
//!
//! Drives the activation cycle for reaction controls: admit the
//! activation, dispatch the toggle request, reconcile the display with
//! the server's answer.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

use forum_core::entities::ReactionAction;
use forum_core::error::EndpointError;
use forum_core::traits::ReactionEndpoint;
use forum_core::value_objects::PostId;

use crate::controls::{Control, ControlId};
use crate::page::ReactionPage;

/// Drives reaction toggles for one page.
///
/// Activations return immediately; the network cycle runs on a spawned
/// task. Per control the cycle is single-flight: while a request is in
/// flight, further activations are consumed without issuing another.
pub struct ReactionToggle {
    page: Arc<ReactionPage>,
    endpoint: Arc<dyn ReactionEndpoint>,
}

impl ReactionToggle {
    /// Create a new ReactionToggle over a page and an endpoint
    pub fn new(page: Arc<ReactionPage>, endpoint: Arc<dyn ReactionEndpoint>) -> Self {
        Self { page, endpoint }
    }

    /// The page this toggle drives
    pub fn page(&self) -> &Arc<ReactionPage> {
        &self.page
    }

    /// Handle one activation of a control.
    ///
    /// Always consumes the activation and returns immediately. A
    /// request is admitted only for a known control that carries a post
    /// identifier and has no cycle in flight; everything else is
    /// reported as ignored. Dropping the returned handle detaches the
    /// cycle, which completes on its own.
    #[instrument(skip(self), fields(view_id = %self.page.view_id()))]
    pub fn activate(&self, control_id: ControlId) -> Activation {
        let Some(control) = self.page.get_control(control_id) else {
            debug!(control_id = %control_id, "Activation on unknown control ignored");
            return Activation::Ignored(IgnoreReason::UnknownControl);
        };

        let Some(post_id) = control.post_id() else {
            // No identifier rendered: consume the activation silently
            debug!(control_id = %control_id, "Activation on inert control ignored");
            return Activation::Ignored(IgnoreReason::Inert);
        };

        if !control.begin_cycle() {
            debug!(
                control_id = %control_id,
                post_id = %post_id,
                "Activation ignored, request already in flight"
            );
            return Activation::Ignored(IgnoreReason::RequestInFlight);
        }

        let endpoint = Arc::clone(&self.endpoint);
        let view_id = self.page.view_id().to_string();
        let handle = tokio::spawn(async move {
            run_cycle(&view_id, &control, &post_id, endpoint.as_ref()).await
        });

        Activation::Dispatched(handle)
    }
}

impl std::fmt::Debug for ReactionToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionToggle")
            .field("page", &self.page)
            .finish()
    }
}

/// One request-reconcile cycle. Always returns the control to Idle.
async fn run_cycle(
    view_id: &str,
    control: &Control,
    post_id: &PostId,
    endpoint: &dyn ReactionEndpoint,
) -> CycleOutcome {
    match endpoint.toggle_reaction(post_id).await {
        Ok(update) => {
            control.finish_reconciled(&update);
            info!(
                view_id = %view_id,
                control_id = %control.id(),
                post_id = %post_id,
                action = %update.action,
                count = update.count,
                "Reaction reconciled"
            );
            CycleOutcome::Reconciled {
                action: update.action,
                count: update.count,
            }
        }
        Err(e) => {
            control.finish_unchanged();
            error!(
                view_id = %view_id,
                control_id = %control.id(),
                post_id = %post_id,
                code = e.code(),
                error = %e,
                "Reaction toggle failed, display unchanged"
            );
            CycleOutcome::Unchanged { error: e }
        }
    }
}

/// Why an activation was consumed without a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No control registered under the ID
    UnknownControl,
    /// The control carries no post identifier
    Inert,
    /// A cycle is already in flight for this control
    RequestInFlight,
}

/// How a dispatched cycle ended
#[derive(Debug)]
pub enum CycleOutcome {
    /// The server confirmed the toggle and the display was reconciled
    Reconciled { action: ReactionAction, count: u64 },
    /// The cycle failed; the display was left untouched
    Unchanged { error: EndpointError },
}

/// Synchronous result of one activation
#[derive(Debug)]
pub enum Activation {
    /// Consumed without issuing a request
    Ignored(IgnoreReason),
    /// A cycle was dispatched; the handle resolves to its outcome
    Dispatched(JoinHandle<CycleOutcome>),
}

impl Activation {
    /// Check if the activation dispatched a request
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(_))
    }

    /// Reason the activation was ignored, if it was
    pub fn ignore_reason(&self) -> Option<IgnoreReason> {
        match self {
            Self::Ignored(reason) => Some(*reason),
            Self::Dispatched(_) => None,
        }
    }

    /// Await the cycle, folding both shapes into one outcome.
    ///
    /// Ignored activations settle immediately.
    pub async fn settle(self) -> ActivationOutcome {
        match self {
            Self::Ignored(reason) => ActivationOutcome::Ignored(reason),
            Self::Dispatched(handle) => match handle.await {
                Ok(CycleOutcome::Reconciled { action, count }) => {
                    ActivationOutcome::Reconciled { action, count }
                }
                Ok(CycleOutcome::Unchanged { error }) => ActivationOutcome::Unchanged(error),
                Err(e) => ActivationOutcome::Unchanged(EndpointError::Transport(format!(
                    "cycle task failed: {e}"
                ))),
            },
        }
    }
}

/// Merged outcome of an activation once it has settled
#[derive(Debug)]
pub enum ActivationOutcome {
    /// Consumed without a request
    Ignored(IgnoreReason),
    /// Display reconciled with the server's answer
    Reconciled { action: ReactionAction, count: u64 },
    /// Display untouched after a failed cycle
    Unchanged(EndpointError),
}

impl ActivationOutcome {
    /// Check if the display was reconciled
    pub fn is_reconciled(&self) -> bool {
        matches!(self, Self::Reconciled { .. })
    }

    /// Check if the activation was consumed without a request
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}
