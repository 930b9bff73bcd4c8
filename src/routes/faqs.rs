use crate::{
    errors::AppError,
    repositories::faqs,
    state::AppState,
    structs::faqs::{DbFaq, PutFaq},
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_faqs).post(create_faq))
        .route("/{id}", get(get_faq).put(update_faq).delete(delete_faq))
}

async fn get_faqs(State(state): State<AppState>) -> Result<Json<Vec<DbFaq>>, AppError> {
    let faqs = faqs::get_faqs(&state).await?;

    Ok(Json(faqs))
}

async fn get_faq(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DbFaq>, AppError> {
    let faq = faqs::get_faq_by_id(&state, id).await?;

    Ok(Json(faq))
}

async fn create_faq(
    State(state): State<AppState>,
    Json(faq): Json<PutFaq>,
) -> Result<Json<DbFaq>, AppError> {
    let faq = faqs::create_faq(&state, faq).await?;

    Ok(Json(faq))
}

async fn update_faq(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(faq): Json<PutFaq>,
) -> Result<Json<DbFaq>, AppError> {
    let faq = faqs::update_faq(&state, id, faq).await?;

    Ok(Json(faq))
}

async fn delete_faq(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    faqs::delete_faq(&state, id).await?;

    Ok(Json(()))
}
