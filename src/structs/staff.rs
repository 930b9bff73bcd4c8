use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// 店家的服務人員，working_hours 的 staff_id 指到這裡
#[derive(Serialize, FromRow)]
pub struct DbStaff {
    pub id: i64,
    pub company_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub active: bool,
}

#[derive(Deserialize)]
pub struct CreateStaff {
    pub company_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStaff {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub active: Option<bool>,
}

#[derive(Deserialize)]
pub struct StaffQuery {
    pub company_id: Uuid,
}
