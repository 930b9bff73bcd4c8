use crate::structs::{locations::DbLocation, users::User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Serialize, FromRow)]
pub struct DbCompany {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub industry: Option<String>,
    pub phone: Option<String>,
    pub owner_user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub industry: Option<String>,
    pub phone: Option<String>,
}

/// 註冊精靈送出的完整資料：公司 + 負責人 + 第一個據點
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub company: RegisterCompany,
    pub owner: RegisterOwner,
    pub location: RegisterLocation,
}

#[derive(Deserialize)]
pub struct RegisterCompany {
    pub name: String,
    pub slug: String,
    pub industry: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterOwner {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterLocation {
    pub name: String,
    pub address: String,
    pub city: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub company: DbCompany,
    pub owner: User,
    pub location: DbLocation,
}
