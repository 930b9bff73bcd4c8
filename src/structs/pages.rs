use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// 行銷站的靜態頁面（關於我們、服務條款等）
#[derive(Serialize, FromRow)]
pub struct DbPage {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct PutPage {
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub published: bool,
}
