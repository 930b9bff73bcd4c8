use crate::{
    state::AppState,
    structs::blogs::{DbBlog, PutBlog},
};
use uuid::Uuid;

/// 取得帶分頁的 blogs
pub async fn get_blogs_with_pagination(
    state: &AppState,
    limit: usize,
    offset: usize,
) -> Result<Vec<DbBlog>, sqlx::Error> {
    let blogs = sqlx::query_as::<_, DbBlog>(
        r#"
            SELECT id, title, slug, markdown, cover_url, tags, published, created_at, updated_at
            FROM blogs
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
    )
    .bind(limit as i64)
    .bind(offset as i64)
    .fetch_all(state.get_pool())
    .await?;

    Ok(blogs)
}

/// 取得特定 blog
pub async fn get_blog_by_id(state: &AppState, id: Uuid) -> Result<DbBlog, sqlx::Error> {
    let blog = sqlx::query_as::<_, DbBlog>(
        r#"
            SELECT id, title, slug, markdown, cover_url, tags, published, created_at, updated_at
            FROM blogs
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_one(state.get_pool())
    .await?;

    Ok(blog)
}

/// 刪除特定 blog
pub async fn delete_blog(state: &AppState, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
            DELETE FROM blogs
            WHERE id = $1
            "#,
    )
    .bind(id)
    .execute(state.get_pool())
    .await?;

    Ok(())
}

/// insert or update blog
pub async fn upsert_blog(state: &AppState, id: Uuid, blog: PutBlog) -> Result<(), sqlx::Error> {
    let query = r#"
            INSERT INTO blogs (id, title, slug, markdown, cover_url, tags, published, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            ON CONFLICT (id)
            DO UPDATE SET
                title = EXCLUDED.title,
                slug = EXCLUDED.slug,
                markdown = EXCLUDED.markdown,
                cover_url = EXCLUDED.cover_url,
                tags = EXCLUDED.tags,
                published = EXCLUDED.published,
                updated_at = NOW();
        "#;

    sqlx::query(query)
        .bind(id)
        .bind(blog.title)
        .bind(blog.slug)
        .bind(blog.markdown)
        .bind(blog.cover_url)
        .bind(blog.tags)
        .bind(blog.published)
        .execute(state.get_pool())
        .await?;

    Ok(())
}
