use crate::{
    errors::AppError,
    repositories::pages,
    state::AppState,
    structs::pages::{DbPage, PutPage},
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_pages).post(create_page))
        .route("/{id}", get(get_page).put(update_page).delete(delete_page))
}

async fn get_pages(State(state): State<AppState>) -> Result<Json<Vec<DbPage>>, AppError> {
    let pages = pages::get_pages(&state).await?;

    Ok(Json(pages))
}

async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DbPage>, AppError> {
    let page = pages::get_page_by_id(&state, id).await?;

    Ok(Json(page))
}

async fn create_page(
    State(state): State<AppState>,
    Json(page): Json<PutPage>,
) -> Result<Json<DbPage>, AppError> {
    let page = pages::create_page(&state, page).await?;

    Ok(Json(page))
}

async fn update_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(page): Json<PutPage>,
) -> Result<Json<DbPage>, AppError> {
    let page = pages::update_page(&state, id, page).await?;

    Ok(Json(page))
}

async fn delete_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    pages::delete_page(&state, id).await?;

    Ok(Json(()))
}
