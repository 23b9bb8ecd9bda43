//! Publishing client.
//!
//! Thin typed wrapper over the dispatcher for the message-publishing
//! integration: one POST to `/api/tweets` per call.

use crate::config::ServiceEndpoint;
use crate::dispatch::Dispatcher;
use crate::error::DispatchResult;
use fleet_session::SessionManager;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// Publish endpoint path on the backend.
pub const PUBLISH_PATH: &str = "/api/tweets";

/// Client for the message-publishing integration.
#[derive(Clone)]
pub struct PublisherClient {
    dispatcher: Dispatcher,
}

impl PublisherClient {
    /// Create a new publisher client on the default Bearer scheme.
    pub fn new(endpoint: ServiceEndpoint, timeout: Duration) -> Self {
        Self {
            dispatcher: Dispatcher::new(endpoint, timeout),
        }
    }

    /// Wrap an existing dispatcher, keeping its header scheme.
    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Authenticate against the backend. See [`Dispatcher::authenticate`].
    pub async fn authenticate(&self, session: &mut SessionManager, password: &str) -> bool {
        self.dispatcher.authenticate(session, password).await
    }

    /// Post a message.
    #[instrument(skip(self, session))]
    pub async fn post_message(
        &self,
        session: &mut SessionManager,
        text: &str,
    ) -> DispatchResult<PostedMessage> {
        let params = PostMessageParams { text };
        self.dispatcher.dispatch(session, PUBLISH_PATH, &params).await
    }
}

/// Request body for posting a message.
#[derive(Debug, Serialize)]
struct PostMessageParams<'a> {
    /// Message text.
    text: &'a str,
}

/// A message accepted by the publishing API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostedMessage {
    /// Server-assigned message id.
    pub id: u64,

    /// Echoed message text.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_message_params_shape() {
        let params = PostMessageParams { text: "hello" };
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"text":"hello"}"#
        );
    }

    #[test]
    fn test_posted_message_tolerates_extra_fields() {
        let posted: PostedMessage =
            serde_json::from_str(r#"{"id":42,"text":"hello","lang":"en"}"#).unwrap();
        assert_eq!(posted.id, 42);
        assert_eq!(posted.text, "hello");
    }
}
