//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response envelope used by every `/api/v1` endpoint
///
/// `status` mirrors the HTTP status of the response. Successful reads carry
/// `data`, errors and simple acknowledgements carry `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub time: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// A 200 response carrying `data`
    pub fn ok(data: T) -> Self {
        Self {
            status: 200,
            data: Some(data),
            message: None,
            time: Utc::now(),
        }
    }

    /// Attach a message to the response
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// A response with a message and no data
    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            message: Some(message.into()),
            time: Utc::now(),
        }
    }
}

// ============================================================================
// Auth Types
// ============================================================================

/// Registration request
///
/// Missing fields are accepted and treated as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Blog Types
// ============================================================================

/// Create or update blog request
///
/// On update an empty field means "leave unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub slug: String,
}
