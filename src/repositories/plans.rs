use crate::{
    repositories::cache,
    state::AppState,
    structs::plans::{CreatePlan, DbPlan, UpdatePlan},
};
use uuid::Uuid;

const CACHE_RESOURCE: &str = "plans";
const PLAN_COLUMNS: &str =
    "id, name, price, billing_period, features, trial_days, active, sort_order";

pub async fn get_plans(state: &AppState) -> Result<Vec<DbPlan>, sqlx::Error> {
    if let Some(plans) = cache::get_list::<DbPlan>(state, CACHE_RESOURCE).await {
        return Ok(plans);
    }

    let plans = sqlx::query_as::<_, DbPlan>(&format!(
        "SELECT {} FROM plans ORDER BY sort_order, price",
        PLAN_COLUMNS
    ))
    .fetch_all(state.get_pool())
    .await?;

    cache::set_list(state, CACHE_RESOURCE, &plans).await;

    Ok(plans)
}

pub async fn get_plan_by_id(state: &AppState, id: Uuid) -> Result<DbPlan, sqlx::Error> {
    sqlx::query_as::<_, DbPlan>(&format!("SELECT {} FROM plans WHERE id = $1", PLAN_COLUMNS))
        .bind(id)
        .fetch_one(state.get_pool())
        .await
}

pub async fn create_plan(state: &AppState, plan: CreatePlan) -> Result<DbPlan, sqlx::Error> {
    let plan = sqlx::query_as::<_, DbPlan>(&format!(
        r#"
            INSERT INTO plans (id, name, price, billing_period, features, trial_days, active, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7)
            RETURNING {}
            "#,
        PLAN_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(plan.name)
    .bind(plan.price)
    .bind(plan.billing_period)
    .bind(plan.features)
    .bind(plan.trial_days)
    .bind(plan.sort_order)
    .fetch_one(state.get_pool())
    .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(plan)
}

pub async fn update_plan(state: &AppState, id: Uuid, update: UpdatePlan) -> Result<DbPlan, sqlx::Error> {
    let mut plan = get_plan_by_id(state, id).await?;

    if let Some(name) = update.name {
        plan.name = name;
    }
    if let Some(price) = update.price {
        plan.price = price;
    }
    if let Some(billing_period) = update.billing_period {
        plan.billing_period = billing_period;
    }
    if let Some(features) = update.features {
        plan.features = features;
    }
    if let Some(trial_days) = update.trial_days {
        plan.trial_days = trial_days;
    }
    if let Some(active) = update.active {
        plan.active = active;
    }
    if let Some(sort_order) = update.sort_order {
        plan.sort_order = sort_order;
    }

    let plan = sqlx::query_as::<_, DbPlan>(&format!(
        r#"
            UPDATE plans
            SET name = $1, price = $2, billing_period = $3, features = $4,
                trial_days = $5, active = $6, sort_order = $7
            WHERE id = $8
            RETURNING {}
            "#,
        PLAN_COLUMNS
    ))
    .bind(plan.name)
    .bind(plan.price)
    .bind(plan.billing_period)
    .bind(plan.features)
    .bind(plan.trial_days)
    .bind(plan.active)
    .bind(plan.sort_order)
    .bind(id)
    .fetch_one(state.get_pool())
    .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(plan)
}

pub async fn delete_plan(state: &AppState, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM plans WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(())
}
