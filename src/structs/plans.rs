use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const BILLING_MONTHLY: &str = "monthly";
pub const BILLING_YEARLY: &str = "yearly";

/// 訂閱方案，行銷頁的價目表資料來源
#[derive(Serialize, Deserialize, FromRow)]
pub struct DbPlan {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub billing_period: String,
    pub features: Vec<String>,
    pub trial_days: i32,
    pub active: bool,
    pub sort_order: i32,
}

#[derive(Deserialize)]
pub struct CreatePlan {
    pub name: String,
    pub price: Decimal,
    pub billing_period: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub trial_days: i32,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Deserialize)]
pub struct UpdatePlan {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub billing_period: Option<String>,
    pub features: Option<Vec<String>>,
    pub trial_days: Option<i32>,
    pub active: Option<bool>,
    pub sort_order: Option<i32>,
}
