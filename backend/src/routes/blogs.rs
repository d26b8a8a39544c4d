//! Blog API routes
//!
//! Reads are public; create, update and delete require a session via the
//! `AuthUser` extractor, which runs before the body is decoded. Update also
//! checks that the blog exists before surfacing a body decode error.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::extract::{parse_id, JsonBody};
use crate::response::Reply;
use crate::services::BlogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use blog_shared::{ApiResponse, Blog, BlogRequest};

/// Create blog routes
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs/", get(list_blogs).post(create_blog))
        .route(
            "/blogs/:id",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
}

/// GET /api/v1/blogs/
async fn list_blogs(State(state): State<AppState>) -> ApiResult<Reply<Vec<Blog>>> {
    let blogs = BlogService::list(state.db()).await?;
    Ok(Reply::ok(blogs))
}

/// GET /api/v1/blogs/:id
async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Reply<Blog>> {
    let blog = BlogService::get(state.db(), parse_id(&id)?).await?;
    Ok(Reply::ok(blog))
}

/// POST /api/v1/blogs/
async fn create_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<BlogRequest>,
) -> ApiResult<Reply<Blog>> {
    let blog = BlogService::create(state.db(), &auth, req).await?;
    Ok(Reply::ok(blog))
}

/// PUT /api/v1/blogs/:id
///
/// Fields sent as empty strings (or omitted) are left unchanged.
async fn update_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    body: Result<JsonBody<BlogRequest>, ApiError>,
) -> ApiResult<Reply<Blog>> {
    let id = parse_id(&id)?;
    let req = body.map(|JsonBody(req)| req);
    let blog = BlogService::update(state.db(), &auth, id, req).await?;

    Ok(Reply(ApiResponse::ok(blog).with_message("Blog updated")))
}

/// DELETE /api/v1/blogs/:id
async fn delete_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Reply<()>> {
    BlogService::delete(state.db(), &auth, parse_id(&id)?).await?;
    Ok(Reply::message("Blog deleted"))
}
