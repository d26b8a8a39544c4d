//! Error types for the blog application

use thiserror::Error;

/// Session authentication errors
///
/// Every variant is reported to clients as a plain "unauthorized"; the
/// variant itself is only used for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing session cookie")]
    MissingToken,

    #[error("Session cookie failed integrity check")]
    TamperedToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token subject is not a user id")]
    InvalidSubject,

    #[error("Token subject no longer exists")]
    UnknownUser,
}
