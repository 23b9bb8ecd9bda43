//! Session state and lifecycle.
//!
//! A session is the in-memory record of operator authentication: an opaque
//! access token plus the instant it stops being honored locally. The token
//! is never inspected or validated client-side; expiry is enforced purely
//! by comparing against the injected clock.

use crate::clock::{Clock, SystemClock};
use crate::settings::StoredSettings;
use chrono::{DateTime, Duration, Utc};

/// Fixed session lifetime in seconds, applied to every installed token.
pub const SESSION_TTL_SECS: i64 = 60 * 60;

/// In-memory authentication state.
///
/// Invariant: `authenticated` is true only while both the token and the
/// expiry are present. All mutation goes through methods that keep this.
#[derive(Clone, Default)]
struct Session {
    token: Option<String>,
    authenticated: bool,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    fn install(&mut self, token: String, expires_at: DateTime<Utc>) {
        self.token = Some(token);
        self.authenticated = true;
        self.expires_at = Some(expires_at);
    }

    fn clear(&mut self) {
        self.token = None;
        self.authenticated = false;
        self.expires_at = None;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("authenticated", &self.authenticated)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Owns the session together with the clock and TTL used to judge it.
///
/// The manager is created empty at process start and mutated to
/// authenticated by a successful login, or back to empty by [`logout`]
/// (also performed by the dispatcher on detecting expiry). It is a plain
/// value owned by the caller; dispatchers borrow it mutably per call.
///
/// [`logout`]: SessionManager::logout
pub struct SessionManager {
    session: Session,
    clock: Box<dyn Clock>,
    ttl: Duration,
}

impl SessionManager {
    /// Create an empty, unauthenticated manager on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create an empty manager with an injected clock.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            session: Session::default(),
            clock,
            ttl: Duration::seconds(SESSION_TTL_SECS),
        }
    }

    /// Override the fixed TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Pre-seed a manager from a persisted settings blob, read once at
    /// startup.
    ///
    /// Restored sessions always get a freshly computed expiry; the original
    /// expiry is deliberately not carried across reloads. A blob that claims
    /// authentication but holds no token yields an unauthenticated session.
    pub fn from_settings(settings: &StoredSettings) -> Self {
        let mut manager = Self::new();
        if settings.is_authenticated {
            if let Some(token) = &settings.access_token {
                manager.install_token(token.clone());
            }
        }
        manager
    }

    /// Store a freshly issued token and start its TTL.
    pub fn install_token(&mut self, token: impl Into<String>) {
        let expires_at = self.clock.now() + self.ttl;
        self.session.install(token.into(), expires_at);
    }

    /// Drop all authentication state unconditionally. Idempotent.
    pub fn logout(&mut self) {
        self.session.clear();
    }

    /// Whether the session is inside its TTL.
    ///
    /// A session with no expiry is never valid, even if a token is present.
    /// Pure read; detecting expiry here does not log the session out.
    pub fn is_valid(&self) -> bool {
        match self.session.expires_at {
            Some(expires_at) => self.clock.now() < expires_at,
            None => false,
        }
    }

    /// Whether a login has succeeded and not been cleared since.
    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    /// The held access token, if any.
    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// When the session stops being honored locally.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.session.expires_at
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("session", &self.session)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn manual_manager() -> (ManualClock, SessionManager) {
        let clock = ManualClock::new(Utc::now());
        let manager = SessionManager::with_clock(Box::new(clock.clone()));
        (clock, manager)
    }

    #[test]
    fn test_fresh_session_is_invalid() {
        let manager = SessionManager::new();
        assert!(!manager.is_valid());
        assert!(!manager.is_authenticated());
        assert!(manager.token().is_none());
        assert!(manager.expires_at().is_none());
    }

    #[test]
    fn test_install_token_starts_ttl() {
        let (clock, mut manager) = manual_manager();
        manager.install_token("issued-token");

        assert!(manager.is_valid());
        assert!(manager.is_authenticated());
        assert_eq!(manager.token(), Some("issued-token"));
        assert_eq!(
            manager.expires_at(),
            Some(clock.now() + Duration::seconds(SESSION_TTL_SECS))
        );
    }

    #[test]
    fn test_session_expires_after_ttl() {
        let (clock, mut manager) = manual_manager();
        manager.install_token("issued-token");

        clock.advance(Duration::minutes(59));
        assert!(manager.is_valid());

        clock.advance(Duration::minutes(1));
        // now == expires_at: the comparison is strict, so already expired
        assert!(!manager.is_valid());
    }

    #[test]
    fn test_logout_clears_everything_and_is_idempotent() {
        let (_clock, mut manager) = manual_manager();
        manager.install_token("issued-token");

        manager.logout();
        assert!(!manager.is_valid());
        assert!(!manager.is_authenticated());
        assert!(manager.token().is_none());
        assert!(manager.expires_at().is_none());

        manager.logout();
        assert!(!manager.is_valid());
    }

    #[test]
    fn test_token_without_expiry_is_invalid() {
        // Partially-initialized state cannot be reached through the public
        // API; poke the fields directly to pin the guard down.
        let mut manager = SessionManager::new();
        manager.session.token = Some("orphan-token".to_string());
        assert!(!manager.is_valid());
    }

    #[test]
    fn test_with_ttl_override() {
        let clock = ManualClock::new(Utc::now());
        let mut manager =
            SessionManager::with_clock(Box::new(clock.clone())).with_ttl(Duration::minutes(5));
        manager.install_token("issued-token");

        clock.advance(Duration::minutes(4));
        assert!(manager.is_valid());
        clock.advance(Duration::minutes(2));
        assert!(!manager.is_valid());
    }

    #[test]
    fn test_reinstall_resets_expiry() {
        let (clock, mut manager) = manual_manager();
        manager.install_token("first");
        clock.advance(Duration::minutes(45));

        manager.install_token("second");
        assert_eq!(manager.token(), Some("second"));
        clock.advance(Duration::minutes(30));
        assert!(manager.is_valid());
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut manager = SessionManager::new();
        manager.install_token("secret-token");
        let rendered = format!("{:?}", manager);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("REDACTED"));
    }
}
