//! HTTP implementation of ReactionEndpoint

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use tracing::instrument;

use forum_common::config::ForumConfig;
use forum_core::entities::ReactionUpdate;
use forum_core::traits::{EndpointResult, ReactionEndpoint};
use forum_core::value_objects::PostId;

use crate::error::map_transport_error;
use crate::payloads::ReactPayload;

/// HTTP implementation of ReactionEndpoint.
///
/// Sends the toggle request the way the rendered page does: a POST with
/// a JSON content type and an empty body, carrying the forum session
/// cookie when one is configured.
#[derive(Clone)]
pub struct HttpReactionEndpoint {
    http: reqwest::Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl HttpReactionEndpoint {
    /// Create a new HttpReactionEndpoint from forum configuration
    pub fn new(config: &ForumConfig) -> EndpointResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(map_transport_error)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session_cookie: config.session_cookie.clone(),
        })
    }

    /// Request URL for toggling a reaction on a post
    fn react_url(&self, post_id: &PostId) -> String {
        format!("{}/forum/post/{}/react", self.base_url, post_id)
    }
}

#[async_trait]
impl ReactionEndpoint for HttpReactionEndpoint {
    #[instrument(skip(self))]
    async fn toggle_reaction(&self, post_id: &PostId) -> EndpointResult<ReactionUpdate> {
        let mut request = self
            .http
            .post(self.react_url(post_id))
            .header(CONTENT_TYPE, "application/json");
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await.map_err(map_transport_error)?;

        // The body is parsed without checking the HTTP status first, so
        // non-JSON error pages and login redirects surface as decode
        // failures rather than a separate status class.
        let payload: ReactPayload = response.json().await.map_err(map_transport_error)?;

        payload.into_update()
    }
}
