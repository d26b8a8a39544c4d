//! Data models for the blog application

use serde::{Deserialize, Serialize};

/// User account
///
/// `password` only ever holds the one-way hash and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

/// Blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub slug: String,
}
