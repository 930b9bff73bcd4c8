use crate::{
    state::AppState,
    structs::categories::{CreateCategory, DbCategory, UpdateCategory},
};
use uuid::Uuid;

pub async fn get_categories(state: &AppState) -> Result<Vec<DbCategory>, sqlx::Error> {
    sqlx::query_as::<_, DbCategory>(
        r#"
            SELECT id, name, slug, parent_id, sort_order
            FROM categories
            ORDER BY sort_order, name
            "#,
    )
    .fetch_all(state.get_pool())
    .await
}

pub async fn get_category_by_id(state: &AppState, id: Uuid) -> Result<DbCategory, sqlx::Error> {
    sqlx::query_as::<_, DbCategory>(
        r#"
            SELECT id, name, slug, parent_id, sort_order
            FROM categories
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn create_category(
    state: &AppState,
    category: CreateCategory,
) -> Result<DbCategory, sqlx::Error> {
    sqlx::query_as::<_, DbCategory>(
        r#"
            INSERT INTO categories (id, name, slug, parent_id, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, slug, parent_id, sort_order
            "#,
    )
    .bind(Uuid::new_v4())
    .bind(category.name)
    .bind(category.slug)
    .bind(category.parent_id)
    .bind(category.sort_order)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_category(
    state: &AppState,
    id: Uuid,
    update: UpdateCategory,
) -> Result<DbCategory, sqlx::Error> {
    let mut category = get_category_by_id(state, id).await?;

    if let Some(name) = update.name {
        category.name = name;
    }
    if let Some(slug) = update.slug {
        category.slug = slug;
    }
    if let Some(parent_id) = update.parent_id {
        category.parent_id = Some(parent_id);
    }
    if let Some(sort_order) = update.sort_order {
        category.sort_order = sort_order;
    }

    sqlx::query_as::<_, DbCategory>(
        r#"
            UPDATE categories
            SET name = $1, slug = $2, parent_id = $3, sort_order = $4
            WHERE id = $5
            RETURNING id, name, slug, parent_id, sort_order
            "#,
    )
    .bind(category.name)
    .bind(category.slug)
    .bind(category.parent_id)
    .bind(category.sort_order)
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn delete_category(state: &AppState, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(())
}
