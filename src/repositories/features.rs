use crate::{
    repositories::cache,
    state::AppState,
    structs::features::{DbFeature, PutFeature},
};
use uuid::Uuid;

const CACHE_RESOURCE: &str = "features";
const FEATURE_COLUMNS: &str = "id, title, description, icon, sort_order, active";

pub async fn get_features(state: &AppState) -> Result<Vec<DbFeature>, sqlx::Error> {
    if let Some(features) = cache::get_list::<DbFeature>(state, CACHE_RESOURCE).await {
        return Ok(features);
    }

    let features = sqlx::query_as::<_, DbFeature>(&format!(
        "SELECT {} FROM features ORDER BY sort_order",
        FEATURE_COLUMNS
    ))
    .fetch_all(state.get_pool())
    .await?;

    cache::set_list(state, CACHE_RESOURCE, &features).await;

    Ok(features)
}

pub async fn get_feature_by_id(state: &AppState, id: Uuid) -> Result<DbFeature, sqlx::Error> {
    sqlx::query_as::<_, DbFeature>(&format!(
        "SELECT {} FROM features WHERE id = $1",
        FEATURE_COLUMNS
    ))
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn create_feature(state: &AppState, feature: PutFeature) -> Result<DbFeature, sqlx::Error> {
    let feature = sqlx::query_as::<_, DbFeature>(&format!(
        r#"
            INSERT INTO features (id, title, description, icon, sort_order, active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
        FEATURE_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(feature.title)
    .bind(feature.description)
    .bind(feature.icon)
    .bind(feature.sort_order)
    .bind(feature.active)
    .fetch_one(state.get_pool())
    .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(feature)
}

pub async fn update_feature(
    state: &AppState,
    id: Uuid,
    feature: PutFeature,
) -> Result<DbFeature, sqlx::Error> {
    let feature = sqlx::query_as::<_, DbFeature>(&format!(
        r#"
            UPDATE features
            SET title = $1, description = $2, icon = $3, sort_order = $4, active = $5
            WHERE id = $6
            RETURNING {}
            "#,
        FEATURE_COLUMNS
    ))
    .bind(feature.title)
    .bind(feature.description)
    .bind(feature.icon)
    .bind(feature.sort_order)
    .bind(feature.active)
    .bind(id)
    .fetch_one(state.get_pool())
    .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(feature)
}

pub async fn delete_feature(state: &AppState, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM features WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(())
}
