use crate::{
    state::AppState,
    structs::coupons::{CreateCoupon, DbCoupon, UpdateCoupon},
};
use uuid::Uuid;

const COUPON_COLUMNS: &str =
    "id, code, discount_type, amount, valid_from, valid_until, max_uses, used_count, active, created_at";

pub async fn get_coupons(state: &AppState) -> Result<Vec<DbCoupon>, sqlx::Error> {
    sqlx::query_as::<_, DbCoupon>(&format!(
        "SELECT {} FROM coupons ORDER BY created_at DESC",
        COUPON_COLUMNS
    ))
    .fetch_all(state.get_pool())
    .await
}

pub async fn get_coupon_by_id(state: &AppState, id: Uuid) -> Result<DbCoupon, sqlx::Error> {
    sqlx::query_as::<_, DbCoupon>(&format!(
        "SELECT {} FROM coupons WHERE id = $1",
        COUPON_COLUMNS
    ))
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn get_coupon_by_code(
    state: &AppState,
    code: &str,
) -> Result<Option<DbCoupon>, sqlx::Error> {
    sqlx::query_as::<_, DbCoupon>(&format!(
        "SELECT {} FROM coupons WHERE code = $1",
        COUPON_COLUMNS
    ))
    .bind(code)
    .fetch_optional(state.get_pool())
    .await
}

pub async fn create_coupon(
    state: &AppState,
    code: String,
    coupon: CreateCoupon,
) -> Result<DbCoupon, sqlx::Error> {
    sqlx::query_as::<_, DbCoupon>(&format!(
        r#"
            INSERT INTO coupons
                (id, code, discount_type, amount, valid_from, valid_until, max_uses, used_count, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0, TRUE, NOW())
            RETURNING {}
            "#,
        COUPON_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(code)
    .bind(coupon.discount_type)
    .bind(coupon.amount)
    .bind(coupon.valid_from)
    .bind(coupon.valid_until)
    .bind(coupon.max_uses)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_coupon(
    state: &AppState,
    id: Uuid,
    update: UpdateCoupon,
) -> Result<DbCoupon, sqlx::Error> {
    let mut coupon = get_coupon_by_id(state, id).await?;

    if let Some(discount_type) = update.discount_type {
        coupon.discount_type = discount_type;
    }
    if let Some(amount) = update.amount {
        coupon.amount = amount;
    }
    if let Some(valid_from) = update.valid_from {
        coupon.valid_from = valid_from;
    }
    if let Some(valid_until) = update.valid_until {
        coupon.valid_until = valid_until;
    }
    if let Some(max_uses) = update.max_uses {
        coupon.max_uses = max_uses;
    }
    if let Some(active) = update.active {
        coupon.active = active;
    }

    sqlx::query_as::<_, DbCoupon>(&format!(
        r#"
            UPDATE coupons
            SET discount_type = $1, amount = $2, valid_from = $3, valid_until = $4,
                max_uses = $5, active = $6
            WHERE id = $7
            RETURNING {}
            "#,
        COUPON_COLUMNS
    ))
    .bind(coupon.discount_type)
    .bind(coupon.amount)
    .bind(coupon.valid_from)
    .bind(coupon.valid_until)
    .bind(coupon.max_uses)
    .bind(coupon.active)
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn delete_coupon(state: &AppState, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM coupons WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(())
}

/// 把過期或用完次數的優惠券停用，回傳影響筆數（排程任務用）
pub async fn deactivate_expired(state: &AppState) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
            UPDATE coupons
            SET active = FALSE
            WHERE active = TRUE
              AND (valid_until < NOW() OR used_count >= max_uses)
            "#,
    )
    .execute(state.get_pool())
    .await?;

    Ok(result.rows_affected())
}
