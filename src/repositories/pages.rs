use crate::{
    state::AppState,
    structs::pages::{DbPage, PutPage},
};
use uuid::Uuid;

const PAGE_COLUMNS: &str = "id, slug, title, content, published, updated_at";

pub async fn get_pages(state: &AppState) -> Result<Vec<DbPage>, sqlx::Error> {
    sqlx::query_as::<_, DbPage>(&format!("SELECT {} FROM pages ORDER BY slug", PAGE_COLUMNS))
        .fetch_all(state.get_pool())
        .await
}

pub async fn get_page_by_id(state: &AppState, id: Uuid) -> Result<DbPage, sqlx::Error> {
    sqlx::query_as::<_, DbPage>(&format!("SELECT {} FROM pages WHERE id = $1", PAGE_COLUMNS))
        .bind(id)
        .fetch_one(state.get_pool())
        .await
}

pub async fn create_page(state: &AppState, page: PutPage) -> Result<DbPage, sqlx::Error> {
    sqlx::query_as::<_, DbPage>(&format!(
        r#"
            INSERT INTO pages (id, slug, title, content, published, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING {}
            "#,
        PAGE_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(page.slug)
    .bind(page.title)
    .bind(page.content)
    .bind(page.published)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_page(state: &AppState, id: Uuid, page: PutPage) -> Result<DbPage, sqlx::Error> {
    sqlx::query_as::<_, DbPage>(&format!(
        r#"
            UPDATE pages
            SET slug = $1, title = $2, content = $3, published = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING {}
            "#,
        PAGE_COLUMNS
    ))
    .bind(page.slug)
    .bind(page.title)
    .bind(page.content)
    .bind(page.published)
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn delete_page(state: &AppState, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM pages WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(())
}
