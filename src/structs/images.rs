use serde::{Deserialize, Serialize};

/// 圖片 server 回傳的單張圖片
#[derive(Debug, Serialize, Deserialize)]
pub struct Image {
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse {
    pub files: Vec<Image>,
}

#[derive(Serialize, Deserialize)]
pub struct UploadedImage {
    pub image_url: String,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteImageRequest {
    pub file_name: String,
}
