//! Test helpers for integration tests
//!
//! Provides a scriptable stand-in for the forum backend plus shortcuts
//! for wiring pages and toggles against it.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use parking_lot::Mutex;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use forum_common::config::ForumConfig;
use forum_core::entities::ButtonMarkup;
use forum_http::HttpReactionEndpoint;
use forum_page::{ControlId, ReactionPage, ReactionToggle};

/// One scripted reply for the stub forum
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubReply {
    /// Successful toggle reply in the forum's wire format
    pub fn toggled(action: &str, count: u64) -> Self {
        Self::json(json!({ "success": true, "action": action, "count": count }))
    }

    /// Rejection reply
    pub fn rejected() -> Self {
        Self::json(json!({ "success": false }))
    }

    /// Reply with an arbitrary JSON body
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }

    /// Reply with a raw body and status
    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    /// Hold the reply back for a while before sending it
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// One request the stub forum received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub post_id: String,
    pub content_type: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

#[derive(Default)]
struct StubState {
    replies: Mutex<HashMap<String, VecDeque<StubReply>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Scriptable stand-in for the forum backend.
///
/// Serves `POST /forum/post/:post_id/react` from a per-post reply queue
/// and records every request it receives. Posts with no scripted reply
/// answer 404 with a plain-text body.
pub struct StubForum {
    pub addr: SocketAddr,
    state: Arc<StubState>,
    _handle: JoinHandle<()>,
}

impl StubForum {
    /// Start a stub forum on an ephemeral port
    pub async fn start() -> Result<Self> {
        let state = Arc::new(StubState::default());
        let app = Router::new()
            .route("/forum/post/:post_id/react", post(react))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the stub
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Queue the next reply for a post
    pub fn enqueue(&self, post_id: &str, reply: StubReply) {
        self.state
            .replies
            .lock()
            .entry(post_id.to_string())
            .or_default()
            .push_back(reply);
    }

    /// Forum configuration pointing at the stub
    pub fn config(&self) -> ForumConfig {
        ForumConfig {
            base_url: self.base_url(),
            session_cookie: None,
            timeout_ms: None,
        }
    }

    /// Endpoint wired to the stub
    pub fn endpoint(&self) -> Result<HttpReactionEndpoint> {
        Ok(HttpReactionEndpoint::new(&self.config())?)
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().len()
    }

    /// Number of requests received for one post
    pub fn request_count_for(&self, post_id: &str) -> usize {
        self.state
            .requests
            .lock()
            .iter()
            .filter(|r| r.post_id == post_id)
            .count()
    }
}

async fn react(
    State(state): State<Arc<StubState>>,
    Path(post_id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.requests.lock().push(RecordedRequest {
        post_id: post_id.clone(),
        content_type: header_text(header::CONTENT_TYPE),
        cookie: header_text(header::COOKIE),
        body,
    });

    // The lock must not be held across the delay below
    let reply = state
        .replies
        .lock()
        .get_mut(&post_id)
        .and_then(VecDeque::pop_front);

    let Some(reply) = reply else {
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain")],
            format!("no scripted reply for post {post_id}"),
        );
    };

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// Load a page from markup and wire a toggle over the given endpoint.
///
/// Control IDs come back in markup order.
pub fn build_toggle(
    markups: &[ButtonMarkup],
    endpoint: HttpReactionEndpoint,
) -> (ReactionToggle, Vec<ControlId>) {
    let page = ReactionPage::load(markups);
    let ids = page.snapshots().into_iter().map(|(id, _)| id).collect();
    (ReactionToggle::new(page, Arc::new(endpoint)), ids)
}
