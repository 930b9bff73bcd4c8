use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const DISCOUNT_PERCENT: &str = "percent";
pub const DISCOUNT_FIXED: &str = "fixed";

#[derive(Serialize, FromRow)]
pub struct DbCoupon {
    pub id: Uuid,
    pub code: String,
    pub discount_type: String,
    pub amount: Decimal,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub max_uses: i32,
    pub used_count: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateCoupon {
    /// 沒帶 code 就自動產生
    pub code: Option<String>,
    pub discount_type: String,
    pub amount: Decimal,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub max_uses: i32,
}

#[derive(Deserialize)]
pub struct UpdateCoupon {
    pub discount_type: Option<String>,
    pub amount: Option<Decimal>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub max_uses: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Deserialize)]
pub struct ValidateCouponRequest {
    pub code: String,
}

#[derive(Serialize)]
pub struct ValidateCouponResponse {
    pub valid: bool,
    pub reason: Option<String>,
}
