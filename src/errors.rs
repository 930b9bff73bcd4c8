use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("資料庫操作失敗: {0}")]
    Database(#[from] sqlx::Error),
    #[error("redis 操作失敗: {0}")]
    Redis(#[from] redis::RedisError),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("無效的輸入: {0}")]
    Validation(String),
    #[error("工作時間同步部分失敗: {failed}/{total}")]
    ScheduleSync { failed: usize, total: usize },
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("圖片 server 連接失敗: {0}")]
    ConnectFail(#[source] reqwest::Error),
    #[error("Invalid response from the server: {0}")]
    InvalidResponse(#[source] reqwest::Error),
    #[error("multipart 處理失敗: {0}")]
    Multipart(#[source] axum::extract::multipart::MultipartError),
    #[error("{0}")]
    InvalidContent(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Redis(_) => StatusCode::BAD_GATEWAY,
            AppError::Request(err) => match err {
                RequestError::ConnectFail(_) => StatusCode::BAD_GATEWAY,
                RequestError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
                RequestError::Multipart(_) => StatusCode::BAD_REQUEST,
                RequestError::InvalidContent(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ScheduleSync { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error_message = self.to_string();
        (status_code, error_message).into_response()
    }
}
