use crate::{
    errors::AppError,
    repositories::plans,
    state::AppState,
    structs::plans::{CreatePlan, DbPlan, UpdatePlan, BILLING_MONTHLY, BILLING_YEARLY},
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_plans).post(create_plan))
        .route("/{id}", get(get_plan).put(update_plan).delete(delete_plan))
}

fn check_billing_period(billing_period: &str) -> Result<(), AppError> {
    if billing_period != BILLING_MONTHLY && billing_period != BILLING_YEARLY {
        return Err(AppError::Validation(format!(
            "billing_period 必須是 {} 或 {}",
            BILLING_MONTHLY, BILLING_YEARLY
        )));
    }

    Ok(())
}

/// 取 plans 清單（行銷頁價目表）
async fn get_plans(State(state): State<AppState>) -> Result<Json<Vec<DbPlan>>, AppError> {
    let plans = plans::get_plans(&state).await?;

    Ok(Json(plans))
}

async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DbPlan>, AppError> {
    let plan = plans::get_plan_by_id(&state, id).await?;

    Ok(Json(plan))
}

async fn create_plan(
    State(state): State<AppState>,
    Json(plan): Json<CreatePlan>,
) -> Result<Json<DbPlan>, AppError> {
    check_billing_period(&plan.billing_period)?;

    let plan = plans::create_plan(&state, plan).await?;

    Ok(Json(plan))
}

async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdatePlan>,
) -> Result<Json<DbPlan>, AppError> {
    if let Some(billing_period) = &update.billing_period {
        check_billing_period(billing_period)?;
    }

    let plan = plans::update_plan(&state, id, update).await?;

    Ok(Json(plan))
}

async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    plans::delete_plan(&state, id).await?;

    Ok(Json(()))
}
