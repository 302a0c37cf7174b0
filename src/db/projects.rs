use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Category, Project, ProjectDraft, ProjectPatch};

/// Optional list predicates, applied in the query itself rather than
/// filtered in memory after the fact.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectFilter {
    pub category: Option<Category>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

pub async fn list(pool: &PgPool, filter: ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT * FROM projects
         WHERE ($1::text IS NULL OR category = $1)
           AND ($2::bool IS NULL OR featured = $2)
           AND ($3::bool IS NULL OR published = $3)
         ORDER BY created_at DESC",
    )
    .bind(filter.category)
    .bind(filter.featured)
    .bind(filter.published)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await
}

/// Featured and published, newest first, capped at `limit`.
pub async fn featured(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT * FROM projects
         WHERE featured AND published
         ORDER BY created_at DESC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Published projects in one category, newest first.
pub async fn by_category(pool: &PgPool, category: Category) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT * FROM projects
         WHERE published AND category = $1
         ORDER BY created_at DESC",
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, draft: &ProjectDraft) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects
             (id, slug, title, description, content, category, images,
              client, year, tags, featured, published, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, now(), now())
         RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(&draft.slug)
    .bind(&draft.title)
    .bind(&draft.description)
    .bind(&draft.content)
    .bind(draft.category)
    .bind(&draft.images)
    .bind(&draft.client)
    .bind(draft.year)
    .bind(&draft.tags)
    .bind(draft.featured)
    .bind(draft.published)
    .fetch_one(pool)
    .await
}

/// Applies only the fields present in the patch; `id` and `created_at`
/// are never written. `updated_at` is refreshed on every call.
/// Returns `None` when no row matched.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    patch: &ProjectPatch,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET
             slug = COALESCE($2, slug),
             title = COALESCE($3, title),
             description = COALESCE($4, description),
             content = COALESCE($5, content),
             category = COALESCE($6, category),
             images = COALESCE($7, images),
             client = COALESCE($8, client),
             year = COALESCE($9, year),
             tags = COALESCE($10, tags),
             featured = COALESCE($11, featured),
             published = COALESCE($12, published),
             updated_at = clock_timestamp()
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&patch.slug)
    .bind(&patch.title)
    .bind(&patch.description)
    .bind(&patch.content)
    .bind(patch.category)
    .bind(&patch.images)
    .bind(&patch.client)
    .bind(patch.year)
    .bind(&patch.tags)
    .bind(patch.featured)
    .bind(patch.published)
    .fetch_optional(pool)
    .await
}

/// Hard delete. Returns the number of rows removed (0 = not found).
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
