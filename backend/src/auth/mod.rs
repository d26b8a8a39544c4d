//! Authentication module
//!
//! Argon2 password hashing, HS256 session tokens and the HMAC-sealed
//! session cookie that carries them.

mod cookie;
mod jwt;
mod middleware;
mod password;

pub use cookie::SessionCookie;
pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
pub use password::PasswordService;
