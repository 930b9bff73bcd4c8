use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// 行銷首頁的功能介紹區塊
#[derive(Serialize, Deserialize, FromRow)]
pub struct DbFeature {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub active: bool,
}

#[derive(Deserialize)]
pub struct PutFeature {
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
