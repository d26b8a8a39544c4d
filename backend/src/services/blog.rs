//! Blog service

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{BlogInput, BlogRepository};
use blog_shared::{Blog, BlogRequest};
use sqlx::PgPool;
use tracing::info;

/// Blog CRUD operations
pub struct BlogService;

impl From<BlogRequest> for BlogInput {
    fn from(req: BlogRequest) -> Self {
        BlogInput {
            title: req.title,
            body: req.body,
            slug: req.slug,
        }
    }
}

impl BlogService {
    /// All blogs, unpaginated
    pub async fn list(pool: &PgPool) -> Result<Vec<Blog>, ApiError> {
        let blogs = BlogRepository::find_all(pool)
            .await
            .map_err(ApiError::from_store)?;

        Ok(blogs.into_iter().map(Blog::from).collect())
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Blog, ApiError> {
        BlogRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::from_store)?
            .map(Blog::from)
            .ok_or_else(|| ApiError::NotFound("record not found".to_string()))
    }

    pub async fn create(pool: &PgPool, author: &AuthUser, req: BlogRequest) -> Result<Blog, ApiError> {
        let blog = BlogRepository::create(pool, req.into())
            .await
            .map_err(ApiError::from_store)?;

        info!(blog_id = blog.id, author_id = author.user_id, author = %author.username, "Blog created");
        Ok(blog.into())
    }

    /// Empty fields in `req` keep their stored value
    ///
    /// The blog must exist before the request body is looked at, so a
    /// missing id wins over an undecodable body.
    pub async fn update(
        pool: &PgPool,
        author: &AuthUser,
        id: i64,
        req: Result<BlogRequest, ApiError>,
    ) -> Result<Blog, ApiError> {
        BlogRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::from_store)?
            .ok_or_else(blog_not_found)?;

        let blog = BlogRepository::update(pool, id, req?.into())
            .await
            .map_err(ApiError::from_store)?
            .ok_or_else(blog_not_found)?;

        info!(blog_id = blog.id, author_id = author.user_id, author = %author.username, "Blog updated");
        Ok(blog.into())
    }

    pub async fn delete(pool: &PgPool, author: &AuthUser, id: i64) -> Result<(), ApiError> {
        let deleted = BlogRepository::delete(pool, id)
            .await
            .map_err(ApiError::from_store)?;

        if !deleted {
            return Err(blog_not_found());
        }

        info!(blog_id = id, author_id = author.user_id, author = %author.username, "Blog deleted");
        Ok(())
    }
}

/// Update and delete report a missing blog as a bad request
fn blog_not_found() -> ApiError {
    ApiError::BadRequest("blog not found".to_string())
}
