//! # Fleet Session
//!
//! This crate holds the operator session state for the TweetFleet client:
//! an opaque access token, an authenticated flag, and the instant the token
//! stops being honored locally.
//!
//! ## Overview
//!
//! The fleet-session crate handles:
//! - **Session state**: token, authenticated flag, and expiry, kept
//!   consistent by construction
//! - **TTL**: every installed token gets a fixed one-hour lifetime,
//!   measured against an injectable clock
//! - **Settings restore**: pre-seeding a session from the persisted
//!   settings blob, always with a freshly computed expiry
//!
//! The session is a plain value owned by the caller (application root or
//! test). Dispatchers in `fleet-clients` borrow it mutably per call, so
//! exclusive access is enforced by the borrow checker rather than a lock.
//!
//! ## Usage
//!
//! ```rust
//! use fleet_session::SessionManager;
//!
//! let mut session = SessionManager::new();
//! assert!(!session.is_valid());
//!
//! // Normally the token comes back from the login endpoint.
//! session.install_token("issued-token");
//! assert!(session.is_valid());
//! assert!(session.is_authenticated());
//!
//! session.logout();
//! assert!(!session.is_valid());
//! assert!(session.token().is_none());
//! ```
//!
//! ## Testing with a manual clock
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use fleet_session::{ManualClock, SessionManager};
//!
//! let clock = ManualClock::new(Utc::now());
//! let mut session = SessionManager::with_clock(Box::new(clock.clone()));
//!
//! session.install_token("issued-token");
//! assert!(session.is_valid());
//!
//! clock.advance(Duration::hours(2));
//! assert!(!session.is_valid());
//! ```

pub mod clock;
pub mod session;
pub mod settings;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use session::{SessionManager, SESSION_TTL_SECS};
pub use settings::{SettingsError, StoredSettings, SETTINGS_KEY};
