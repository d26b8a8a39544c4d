//! Application state management
//!
//! The shared application context handed to every request handler via
//! Axum's state extraction. It is built once at startup and read-only
//! afterwards; there is no other process-wide state.

use crate::auth::{JwtService, SessionCookie};
use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// All fields are cheap to clone (`PgPool` and the key holders are
/// internally reference counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token signer/verifier with pre-computed keys
    pub jwt: JwtService,
    /// Session cookie sealer keyed with the same secret
    pub session: SessionCookie,
}

impl AppState {
    /// Create a new application state
    ///
    /// Derives the JWT keys and the cookie MAC key from the configured
    /// secret; call once at startup.
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry_secs);
        let session = SessionCookie::new(
            &config.jwt.secret,
            &config.cookie.name,
            config.jwt.token_expiry_secs,
            config.cookie.secure,
        );

        Self {
            db,
            config: Arc::new(config),
            jwt,
            session,
        }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the JWT service
    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    /// Get a reference to the session cookie sealer
    #[inline]
    pub fn session(&self) -> &SessionCookie {
        &self.session
    }
}
