use crate::{
    errors::AppError,
    repositories::brands,
    state::AppState,
    structs::brands::{CreateBrand, DbBrand, UpdateBrand},
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_brands).post(create_brand))
        .route(
            "/{id}",
            get(get_brand).put(update_brand).delete(delete_brand),
        )
}

/// 取 brands 清單
async fn get_brands(State(state): State<AppState>) -> Result<Json<Vec<DbBrand>>, AppError> {
    let brands = brands::get_brands(&state).await?;

    Ok(Json(brands))
}

async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DbBrand>, AppError> {
    let brand = brands::get_brand_by_id(&state, id).await?;

    Ok(Json(brand))
}

async fn create_brand(
    State(state): State<AppState>,
    Json(brand): Json<CreateBrand>,
) -> Result<Json<DbBrand>, AppError> {
    let brand = brands::create_brand(&state, brand).await?;

    Ok(Json(brand))
}

async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateBrand>,
) -> Result<Json<DbBrand>, AppError> {
    let brand = brands::update_brand(&state, id, update).await?;

    Ok(Json(brand))
}

async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    brands::delete_brand(&state, id).await?;

    Ok(Json(()))
}
