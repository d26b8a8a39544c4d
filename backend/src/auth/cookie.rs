//! Session cookie sealing
//!
//! The cookie value is `<jwt>.<hex HMAC-SHA256 of the jwt>`. The tag is
//! keyed with the signing secret and checked in constant time before the
//! token itself is parsed.

use anyhow::Result;
use axum_extra::extract::cookie::{Cookie, SameSite};
use blog_shared::AuthError;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;
use time::{Duration, OffsetDateTime};

type HmacSha256 = Hmac<Sha256>;

/// Builds, seals and opens the session cookie
#[derive(Clone)]
pub struct SessionCookie {
    key: Arc<[u8]>,
    name: Arc<str>,
    lifetime_secs: i64,
    secure: bool,
}

impl SessionCookie {
    pub fn new(secret: &str, name: &str, lifetime_secs: i64, secure: bool) -> Self {
        Self {
            key: Arc::from(secret.as_bytes()),
            name: Arc::from(name),
            lifetime_secs,
            secure,
        }
    }

    /// Cookie name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(&self.key).map_err(|e| anyhow::anyhow!("Invalid HMAC key: {}", e))
    }

    /// Append the hex-encoded MAC tag to a signed token
    pub fn seal(&self, token: &str) -> Result<String> {
        let mut mac = self.mac()?;
        mac.update(token.as_bytes());
        let tag = hex::encode(mac.finalize().into_bytes());
        Ok(format!("{}.{}", token, tag))
    }

    /// Check the MAC tag and return the enclosed token
    pub fn open<'a>(&self, value: &'a str) -> Result<&'a str, AuthError> {
        let (token, tag) = value.rsplit_once('.').ok_or(AuthError::TamperedToken)?;
        let tag = hex::decode(tag).map_err(|_| AuthError::TamperedToken)?;

        let mut mac = self.mac().map_err(|_| AuthError::TamperedToken)?;
        mac.update(token.as_bytes());
        mac.verify_slice(&tag).map_err(|_| AuthError::TamperedToken)?;

        Ok(token)
    }

    /// Seal `token` into an HTTP-only session cookie
    pub fn issue(&self, token: &str) -> Result<Cookie<'static>> {
        let value = self.seal(token)?;
        let expires = OffsetDateTime::now_utc() + Duration::seconds(self.lifetime_secs);

        Ok(Cookie::build((self.name.to_string(), value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .expires(expires)
            .build())
    }

    /// An empty, already-expired session cookie
    pub fn clear(&self) -> Cookie<'static> {
        Cookie::build((self.name.to_string(), String::new()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .expires(OffsetDateTime::now_utc() - Duration::hours(1))
            .build()
    }
}
