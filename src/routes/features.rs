use crate::{
    errors::AppError,
    repositories::features,
    state::AppState,
    structs::features::{DbFeature, PutFeature},
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_features).post(create_feature))
        .route(
            "/{id}",
            get(get_feature).put(update_feature).delete(delete_feature),
        )
}

async fn get_features(State(state): State<AppState>) -> Result<Json<Vec<DbFeature>>, AppError> {
    let features = features::get_features(&state).await?;

    Ok(Json(features))
}

async fn get_feature(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DbFeature>, AppError> {
    let feature = features::get_feature_by_id(&state, id).await?;

    Ok(Json(feature))
}

async fn create_feature(
    State(state): State<AppState>,
    Json(feature): Json<PutFeature>,
) -> Result<Json<DbFeature>, AppError> {
    let feature = features::create_feature(&state, feature).await?;

    Ok(Json(feature))
}

async fn update_feature(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(feature): Json<PutFeature>,
) -> Result<Json<DbFeature>, AppError> {
    let feature = features::update_feature(&state, id, feature).await?;

    Ok(Json(feature))
}

async fn delete_feature(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    features::delete_feature(&state, id).await?;

    Ok(Json(()))
}
