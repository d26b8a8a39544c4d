//! Blog repository for database operations

use anyhow::Result;
use blog_shared::Blog;
use sqlx::PgPool;

/// Blog record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogRecord {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub slug: String,
}

impl From<BlogRecord> for Blog {
    fn from(record: BlogRecord) -> Self {
        Blog {
            id: record.id,
            title: record.title,
            body: record.body,
            slug: record.slug,
        }
    }
}

/// Input for creating or updating a blog
#[derive(Debug, Clone, Default)]
pub struct BlogInput {
    pub title: String,
    pub body: String,
    pub slug: String,
}

/// Blog repository for database operations
pub struct BlogRepository;

impl BlogRepository {
    /// List every blog, oldest first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<BlogRecord>> {
        let blogs = sqlx::query_as::<_, BlogRecord>(
            r#"
            SELECT id, title, body, slug
            FROM blogs
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(blogs)
    }

    /// Find blog by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<BlogRecord>> {
        let blog = sqlx::query_as::<_, BlogRecord>(
            r#"
            SELECT id, title, body, slug
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(blog)
    }

    /// Insert a blog
    pub async fn create(pool: &PgPool, input: BlogInput) -> Result<BlogRecord> {
        let blog = sqlx::query_as::<_, BlogRecord>(
            r#"
            INSERT INTO blogs (title, body, slug)
            VALUES ($1, $2, $3)
            RETURNING id, title, body, slug
            "#,
        )
        .bind(input.title)
        .bind(input.body)
        .bind(input.slug)
        .fetch_one(pool)
        .await?;

        Ok(blog)
    }

    /// Partially update a blog
    ///
    /// Empty strings leave the existing column unchanged. Returns `None`
    /// if no blog has this id.
    pub async fn update(pool: &PgPool, id: i64, input: BlogInput) -> Result<Option<BlogRecord>> {
        let blog = sqlx::query_as::<_, BlogRecord>(
            r#"
            UPDATE blogs SET
                title = COALESCE(NULLIF($2, ''), title),
                body = COALESCE(NULLIF($3, ''), body),
                slug = COALESCE(NULLIF($4, ''), slug)
            WHERE id = $1
            RETURNING id, title, body, slug
            "#,
        )
        .bind(id)
        .bind(input.title)
        .bind(input.body)
        .bind(input.slug)
        .fetch_optional(pool)
        .await?;

        Ok(blog)
    }

    /// Delete a blog; returns whether a row was removed
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM blogs WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

