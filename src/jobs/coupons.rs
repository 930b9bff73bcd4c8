use crate::{repositories::coupons, state::AppState, structs::jobs::AppJob};
use async_trait::async_trait;

#[derive(Clone)]
pub struct ExpiredCouponJob;

#[async_trait]
impl AppJob for ExpiredCouponJob {
    fn name(&self) -> &str {
        "expired_coupons"
    }

    fn cron_expression(&self) -> &str {
        "0 0 * * * *" // 每小時整點
    }

    // 把過期或用完次數的優惠券停用
    async fn run(&self, state: AppState) {
        match coupons::deactivate_expired(&state).await {
            Ok(0) => {}
            Ok(count) => tracing::info!("停用了 {} 張過期優惠券", count),
            Err(err) => tracing::error!("優惠券清理失敗: {}", err),
        }
    }
}
