//! Authentication routes
//!
//! Register, login and logout. The session credential is only ever
//! returned as the `jwt` cookie, never in a response body.

use crate::error::ApiResult;
use crate::extract::JsonBody;
use crate::response::Reply;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Router};
use axum_extra::extract::CookieJar;
use blog_shared::{LoginRequest, RegisterRequest, User};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// POST /api/v1/register
async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<Reply<User>> {
    let user = UserService::register(state.db(), &req.username, &req.password).await?;
    Ok(Reply::ok(user))
}

/// POST /api/v1/login
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<(CookieJar, Reply<()>)> {
    let cookie = UserService::login(
        state.db(),
        state.jwt(),
        state.session(),
        &req.username,
        &req.password,
    )
    .await?;

    Ok((jar.add(cookie), Reply::message("Success Login")))
}

/// POST /api/v1/logout
///
/// Succeeds whether or not a session exists.
async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Reply<()>) {
    (
        jar.add(state.session().clear()),
        Reply::message("Success Logout"),
    )
}
