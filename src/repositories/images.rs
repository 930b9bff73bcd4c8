use crate::{
    errors::{AppError, RequestError},
    state::AppState,
    structs::images::{ApiResponse, DeleteImageRequest, Image},
};
use reqwest::{multipart::Form, Response};

/// 圖片實體放在外部的儲存服務，這裡只負責轉送

pub async fn upload(state: &AppState, form: Form) -> Result<Response, AppError> {
    let client = state.get_http_client();

    let url = format!("{}{}", state.get_image_api_host(), "/upload-image");

    client
        .post(url)
        .multipart(form)
        .send()
        .await
        .map_err(|err| AppError::Request(RequestError::ConnectFail(err)))
}

pub async fn images(state: &AppState) -> Result<Vec<Image>, AppError> {
    let client = state.get_http_client();

    let url = format!("{}{}", state.get_image_api_host(), "/list-images");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| AppError::Request(RequestError::ConnectFail(err)))?
        .json::<ApiResponse>()
        .await
        .map_err(|err| AppError::Request(RequestError::InvalidResponse(err)))?;

    Ok(response.files)
}

pub async fn delete(state: &AppState, delete_data: DeleteImageRequest) -> Result<(), AppError> {
    let client = state.get_http_client();

    let url = format!("{}{}", state.get_image_api_host(), "/delete-image");

    let _ = client
        .delete(url)
        .json(&delete_data)
        .send()
        .await
        .map_err(|err| AppError::Request(RequestError::ConnectFail(err)))?;

    Ok(())
}
