use crate::{errors::AppError, state::AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

pub async fn index(State(_state): State<AppState>) -> Result<Json<&'static str>, AppError> {
    Ok(Json("booking admin api"))
}

pub async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "empty page")
}
