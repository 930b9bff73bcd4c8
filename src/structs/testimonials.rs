use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Serialize, Deserialize, FromRow)]
pub struct DbTestimonial {
    pub id: Uuid,
    pub author: String,
    pub company: Option<String>,
    pub quote: String,
    pub rating: i16,
    pub avatar_url: Option<String>,
    pub active: bool,
}

#[derive(Deserialize)]
pub struct PutTestimonial {
    pub author: String,
    pub company: Option<String>,
    pub quote: String,
    pub rating: i16,
    pub avatar_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
