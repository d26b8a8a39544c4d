//! Blog Shared Library
//!
//! This crate contains the models and API types shared between the
//! backend and its clients.

pub mod errors;
pub mod models;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use models::{Blog, User};
pub use types::*;
