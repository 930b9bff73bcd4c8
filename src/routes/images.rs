use crate::{
    errors::{AppError, RequestError},
    repositories::images::{delete as repo_delete, images as repo_images, upload as repo_upload},
    state::AppState,
    structs::images::{DeleteImageRequest, Image, UploadedImage},
};
use axum::{
    extract::{Multipart, State},
    routing::get,
    Json, Router,
};
use reqwest::multipart;

pub fn new() -> Router<AppState> {
    Router::new().route("/", get(images).post(upload).delete(delete))
}

// 處理圖片上傳請求，檔案內容原封轉送到圖片 server
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadedImage>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Request(RequestError::Multipart(err)))?
    {
        let file_name = field
            .file_name()
            .ok_or_else(|| {
                AppError::Request(RequestError::InvalidContent(
                    "Missing file name".to_string(),
                ))
            })?
            .to_string();

        let content_type = field
            .content_type()
            .ok_or_else(|| {
                AppError::Request(RequestError::InvalidContent(
                    "Missing content type".to_string(),
                ))
            })?
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::Request(RequestError::Multipart(err)))?;

        let part = multipart::Part::bytes(data.to_vec())
            .file_name(file_name.clone())
            .mime_str(&content_type)
            .map_err(|err| AppError::Request(RequestError::InvalidContent(err.to_string())))?;

        let form = multipart::Form::new().part("file", part);
        let res = repo_upload(&state, form).await?;

        if res.status().is_success() {
            return res
                .json()
                .await
                .map(Json)
                .map_err(|err| AppError::Request(RequestError::InvalidResponse(err)));
        }
    }

    // 沒有任何有效檔案
    Err(AppError::Request(RequestError::InvalidContent(
        "empty multipart".to_string(),
    )))
}

// 處理獲取圖片列表請求
pub async fn images(State(state): State<AppState>) -> Result<Json<Vec<Image>>, AppError> {
    let images = repo_images(&state).await?;

    Ok(Json(images))
}

// 處理刪除圖片請求
pub async fn delete(
    State(state): State<AppState>,
    Json(delete_data): Json<DeleteImageRequest>,
) -> Result<Json<()>, AppError> {
    repo_delete(&state, delete_data).await?;

    Ok(Json(()))
}
