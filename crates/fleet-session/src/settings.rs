//! Persisted operator settings.
//!
//! The browser build keeps a small settings blob under the
//! `tweetfleet-settings` key and reads it once at startup to pre-seed the
//! session. Field names stay camelCase for compatibility with blobs written
//! by earlier frontend builds.

use crate::session::SessionManager;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key the settings blob lives under.
pub const SETTINGS_KEY: &str = "tweetfleet-settings";

/// Settings decode errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Blob is not valid JSON or has the wrong shape.
    #[error("malformed settings blob: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Persisted settings blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredSettings {
    /// Whether the operator had an authenticated session when persisted.
    pub is_authenticated: bool,

    /// Access token carried across reloads, when the deployment opts in.
    /// Older blobs carry only the flag; those restore as unauthenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl StoredSettings {
    /// Decode a settings blob from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode to the JSON form used by the settings store.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Snapshot the current session state for persistence.
    pub fn capture(manager: &SessionManager) -> Self {
        Self {
            is_authenticated: manager.is_authenticated(),
            access_token: manager.token().map(str::to_owned),
        }
    }
}
