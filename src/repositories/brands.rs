use crate::{
    state::AppState,
    structs::brands::{CreateBrand, DbBrand, UpdateBrand},
};
use uuid::Uuid;

const BRAND_COLUMNS: &str = "id, name, logo_url, website, sort_order, active, created_at";

pub async fn get_brands(state: &AppState) -> Result<Vec<DbBrand>, sqlx::Error> {
    sqlx::query_as::<_, DbBrand>(&format!(
        "SELECT {} FROM brands ORDER BY sort_order, name",
        BRAND_COLUMNS
    ))
    .fetch_all(state.get_pool())
    .await
}

pub async fn get_brand_by_id(state: &AppState, id: Uuid) -> Result<DbBrand, sqlx::Error> {
    sqlx::query_as::<_, DbBrand>(&format!(
        "SELECT {} FROM brands WHERE id = $1",
        BRAND_COLUMNS
    ))
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn create_brand(state: &AppState, brand: CreateBrand) -> Result<DbBrand, sqlx::Error> {
    sqlx::query_as::<_, DbBrand>(&format!(
        r#"
            INSERT INTO brands (id, name, logo_url, website, sort_order, active, created_at)
            VALUES ($1, $2, $3, $4, $5, TRUE, NOW())
            RETURNING {}
            "#,
        BRAND_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(brand.name)
    .bind(brand.logo_url)
    .bind(brand.website)
    .bind(brand.sort_order)
    .fetch_one(state.get_pool())
    .await
}

/// 取舊資料，把有帶值的欄位蓋掉後整筆更新
pub async fn update_brand(
    state: &AppState,
    id: Uuid,
    update: UpdateBrand,
) -> Result<DbBrand, sqlx::Error> {
    let mut brand = get_brand_by_id(state, id).await?;

    if let Some(name) = update.name {
        brand.name = name;
    }
    if let Some(logo_url) = update.logo_url {
        brand.logo_url = Some(logo_url);
    }
    if let Some(website) = update.website {
        brand.website = Some(website);
    }
    if let Some(sort_order) = update.sort_order {
        brand.sort_order = sort_order;
    }
    if let Some(active) = update.active {
        brand.active = active;
    }

    sqlx::query_as::<_, DbBrand>(&format!(
        r#"
            UPDATE brands
            SET name = $1, logo_url = $2, website = $3, sort_order = $4, active = $5
            WHERE id = $6
            RETURNING {}
            "#,
        BRAND_COLUMNS
    ))
    .bind(brand.name)
    .bind(brand.logo_url)
    .bind(brand.website)
    .bind(brand.sort_order)
    .bind(brand.active)
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn delete_brand(state: &AppState, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM brands WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(())
}
