//! Note-saving client.
//!
//! Thin typed wrapper over the dispatcher for the note-saving integration:
//! one POST to `/api/save` per call. The backend writes the note to a
//! source-hosting repository and reports where it landed.

use crate::config::ServiceEndpoint;
use crate::dispatch::Dispatcher;
use crate::error::DispatchResult;
use fleet_session::SessionManager;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// Save endpoint path on the backend.
pub const SAVE_PATH: &str = "/api/save";

/// Client for the note-saving integration.
#[derive(Clone)]
pub struct NotesClient {
    dispatcher: Dispatcher,
}

impl NotesClient {
    /// Create a new notes client on the default Bearer scheme.
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

    /// Save a note.
    #[instrument(skip(self, session, content))]
    pub async fn save_note(
        &self,
        session: &mut SessionManager,
        content: &str,
    ) -> DispatchResult<SavedNote> {
        let params = SaveNoteParams { content };
        self.dispatcher.dispatch(session, SAVE_PATH, &params).await
    }
}

/// Request body for saving a note.
#[derive(Debug, Serialize)]
struct SaveNoteParams<'a> {
    /// Note content.
    content: &'a str,
}

/// Result of saving a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedNote {
    /// Whether the note was written.
    pub success: bool,

    /// Human-readable result message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Repository the note was written to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Path of the created note file within the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
