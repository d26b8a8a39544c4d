//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod blog;
pub mod user;

pub use blog::{BlogInput, BlogRecord, BlogRepository};
pub use user::{UserRecord, UserRepository};
