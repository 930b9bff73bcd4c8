use crate::{
    errors::AppError,
    repositories::coupons,
    state::AppState,
    structs::coupons::{
        CreateCoupon, DbCoupon, UpdateCoupon, ValidateCouponRequest, ValidateCouponResponse,
        DISCOUNT_FIXED, DISCOUNT_PERCENT,
    },
};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use uuid::Uuid;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_coupons).post(create_coupon))
        .route("/validate", post(validate_coupon))
        .route(
            "/{id}",
            get(get_coupon).put(update_coupon).delete(delete_coupon),
        )
}

/// 沒帶 code 時自動產生的八碼大寫代碼
fn generate_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(|c| (c as char).to_ascii_uppercase())
        .collect()
}

fn check_discount_type(discount_type: &str) -> Result<(), AppError> {
    if discount_type != DISCOUNT_PERCENT && discount_type != DISCOUNT_FIXED {
        return Err(AppError::Validation(format!(
            "discount_type 必須是 {} 或 {}",
            DISCOUNT_PERCENT, DISCOUNT_FIXED
        )));
    }

    Ok(())
}

async fn get_coupons(State(state): State<AppState>) -> Result<Json<Vec<DbCoupon>>, AppError> {
    let coupons = coupons::get_coupons(&state).await?;

    Ok(Json(coupons))
}

async fn get_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DbCoupon>, AppError> {
    let coupon = coupons::get_coupon_by_id(&state, id).await?;

    Ok(Json(coupon))
}

async fn create_coupon(
    State(state): State<AppState>,
    Json(coupon): Json<CreateCoupon>,
) -> Result<Json<DbCoupon>, AppError> {
    check_discount_type(&coupon.discount_type)?;

    let code = match &coupon.code {
        Some(code) => code.trim().to_ascii_uppercase(),
        None => generate_code(),
    };

    let coupon = coupons::create_coupon(&state, code, coupon).await?;

    Ok(Json(coupon))
}

async fn update_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateCoupon>,
) -> Result<Json<DbCoupon>, AppError> {
    if let Some(discount_type) = &update.discount_type {
        check_discount_type(discount_type)?;
    }

    let coupon = coupons::update_coupon(&state, id, update).await?;

    Ok(Json(coupon))
}

async fn delete_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    coupons::delete_coupon(&state, id).await?;

    Ok(Json(()))
}

/// 結帳前檢查優惠券是否可用
async fn validate_coupon(
    State(state): State<AppState>,
    Json(req): Json<ValidateCouponRequest>,
) -> Result<Json<ValidateCouponResponse>, AppError> {
    let code = req.code.trim().to_ascii_uppercase();

    let Some(coupon) = coupons::get_coupon_by_code(&state, &code).await? else {
        return Ok(Json(ValidateCouponResponse {
            valid: false,
            reason: Some("查無此優惠券".to_string()),
        }));
    };

    let now = Utc::now();

    let reason = if !coupon.active {
        Some("優惠券已停用")
    } else if now < coupon.valid_from {
        Some("優惠券尚未生效")
    } else if now > coupon.valid_until {
        Some("優惠券已過期")
    } else if coupon.used_count >= coupon.max_uses {
        Some("優惠券已達使用上限")
    } else {
        None
    };

    Ok(Json(ValidateCouponResponse {
        valid: reason.is_none(),
        reason: reason.map(|r| r.to_string()),
    }))
}
