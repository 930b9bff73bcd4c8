use crate::{
    errors::AppError,
    repositories::categories,
    state::AppState,
    structs::categories::{CreateCategory, DbCategory, UpdateCategory},
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}

async fn get_categories(State(state): State<AppState>) -> Result<Json<Vec<DbCategory>>, AppError> {
    let categories = categories::get_categories(&state).await?;

    Ok(Json(categories))
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DbCategory>, AppError> {
    let category = categories::get_category_by_id(&state, id).await?;

    Ok(Json(category))
}

async fn create_category(
    State(state): State<AppState>,
    Json(category): Json<CreateCategory>,
) -> Result<Json<DbCategory>, AppError> {
    let category = categories::create_category(&state, category).await?;

    Ok(Json(category))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateCategory>,
) -> Result<Json<DbCategory>, AppError> {
    let category = categories::update_category(&state, id, update).await?;

    Ok(Json(category))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    categories::delete_category(&state, id).await?;

    Ok(Json(()))
}
