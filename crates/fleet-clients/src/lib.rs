//! # Fleet Clients
//!
//! This crate provides the authenticated HTTP dispatchers for the TweetFleet
//! operator tool: posting a message to the publishing API and saving a note
//! via the source-hosting API.
//!
//! ## Overview
//!
//! The fleet-clients crate handles:
//! - **Dispatch**: one generic authenticated dispatcher, parameterized by
//!   endpoint path, payload type, and header scheme
//! - **Login**: the password round trip that mints the session token
//! - **Integrations**: thin typed clients for publishing and note-saving
//! - **Errors**: a single taxonomy covering missing sessions, expiry,
//!   server rejection, and transport failures
//!
//! The session itself lives in `fleet-session` and is owned by the caller;
//! every dispatch borrows it mutably, checks it, and invalidates it when
//! the TTL has elapsed or the server answers 401. Each dispatch is a single
//! attempt and a single round trip; there is no retry or batching layer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fleet_clients::{ClientConfig, DispatchError, PublisherClient};
//! use fleet_session::SessionManager;
//!
//! async fn post() -> Result<(), DispatchError> {
//!     let config = ClientConfig::from_env();
//!     let publisher = PublisherClient::new(config.backend.clone(), config.timeout());
//!
//!     let mut session = SessionManager::new();
//!     if !publisher.authenticate(&mut session, "admin password").await {
//!         eprintln!("login failed");
//!         return Ok(());
//!     }
//!
//!     let posted = publisher.post_message(&mut session, "hello").await?;
//!     println!("posted message {}", posted.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure handling
//!
//! ```rust,no_run
//! use fleet_clients::{ErrorKind, NotesClient};
//! use fleet_session::SessionManager;
//!
//! async fn save(notes: &NotesClient, session: &mut SessionManager) {
//!     match notes.save_note(session, "meeting memo").await {
//!         Ok(saved) => println!("saved to {:?}", saved.path),
//!         Err(e) if e.kind() == ErrorKind::Expired => {
//!             // The dispatcher already logged the session out.
//!             eprintln!("please authenticate again");
//!         }
//!         Err(e) => eprintln!("save failed: {}", e),
//!     }
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod notes;
pub mod publisher;

// Re-export main types
pub use config::{ClientConfig, ServiceEndpoint};
pub use dispatch::{AuthScheme, Dispatcher, LOGIN_PATH};
pub use error::{DispatchError, DispatchResult, ErrorKind};
pub use notes::{NotesClient, SavedNote, SAVE_PATH};
pub use publisher::{PostedMessage, PublisherClient, PUBLISH_PATH};
