use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Serialize, FromRow)]
pub struct DbBrand {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateBrand {
    pub name: String,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

/// 只帶有要改的欄位
#[derive(Deserialize)]
pub struct UpdateBrand {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub sort_order: Option<i32>,
    pub active: Option<bool>,
}
