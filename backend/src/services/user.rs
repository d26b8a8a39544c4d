//! User service for registration and login
//!
//! Password hashing/verification runs on the blocking thread pool; token
//! signing uses the keys pre-computed in `AppState`.

use crate::auth::{JwtService, PasswordService, SessionCookie};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use axum_extra::extract::cookie::Cookie;
use blog_shared::User;
use sqlx::PgPool;
use tracing::info;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// Usernames and passwords are not validated; an empty value is
    /// stored as-is. A taken username is a `Conflict`.
    pub async fn register(pool: &PgPool, username: &str, password: &str) -> Result<User, ApiError> {
        if UserRepository::username_exists(pool, username)
            .await
            .map_err(ApiError::from_store)?
        {
            return Err(username_taken());
        }

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        // A concurrent registration can still win the race; the unique
        // index turns that into the same conflict.
        let user = UserRepository::create(pool, username, &password_hash)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    username_taken()
                } else {
                    ApiError::from_store(e)
                }
            })?;

        info!(user_id = user.id, "User registered");
        Ok(user.into())
    }

    /// Check credentials and build the session cookie
    ///
    /// Unknown usernames are `NotFound`, a wrong password is `BadRequest`.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        session: &SessionCookie,
        username: &str,
        password: &str,
    ) -> Result<Cookie<'static>, ApiError> {
        let user = UserRepository::find_by_username(pool, username)
            .await
            .map_err(ApiError::from_store)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let valid = PasswordService::verify_async(password.to_string(), user.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::BadRequest("password incorrect".to_string()));
        }

        let token = jwt_service
            .generate_token(user.id)
            .map_err(ApiError::Internal)?;
        let cookie = session.issue(&token).map_err(ApiError::Internal)?;

        info!(user_id = user.id, "User logged in");
        Ok(cookie)
    }
}

fn username_taken() -> ApiError {
    ApiError::Conflict("Username already taken".to_string())
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}
