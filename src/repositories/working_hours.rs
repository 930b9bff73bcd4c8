use crate::{
    services::working_hours::{SlotCreate, SlotUpdate},
    state::AppState,
    structs::working_hours::DbWorkingHourSlot,
};
use uuid::Uuid;

/// 取公司（或指定員工）的全部時段，staff_id 為 None 時取公司層級的預設時間
pub async fn get_slots(
    state: &AppState,
    company_id: Uuid,
    staff_id: Option<i64>,
) -> Result<Vec<DbWorkingHourSlot>, sqlx::Error> {
    sqlx::query_as::<_, DbWorkingHourSlot>(
        r#"
            SELECT id, company_id, staff_id, day_of_week, start_time, end_time, is_break
            FROM working_hours
            WHERE company_id = $1
              AND staff_id IS NOT DISTINCT FROM $2
            ORDER BY id
            "#,
    )
    .bind(company_id)
    .bind(staff_id)
    .fetch_all(state.get_pool())
    .await
}

pub async fn create_slot(
    state: &AppState,
    company_id: Uuid,
    staff_id: Option<i64>,
    slot: &SlotCreate,
) -> Result<DbWorkingHourSlot, sqlx::Error> {
    sqlx::query_as::<_, DbWorkingHourSlot>(
        r#"
            INSERT INTO working_hours (company_id, staff_id, day_of_week, start_time, end_time, is_break)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, company_id, staff_id, day_of_week, start_time, end_time, is_break
            "#,
    )
    .bind(company_id)
    .bind(staff_id)
    .bind(&slot.day_of_week)
    .bind(slot.start_time)
    .bind(slot.end_time)
    .bind(slot.is_break)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_slot(state: &AppState, slot: &SlotUpdate) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
            UPDATE working_hours
            SET day_of_week = $1,
                start_time = $2,
                end_time = $3,
                is_break = $4
            WHERE id = $5
            "#,
    )
    .bind(&slot.day_of_week)
    .bind(slot.start_time)
    .bind(slot.end_time)
    .bind(slot.is_break)
    .bind(slot.id)
    .execute(state.get_pool())
    .await?;

    Ok(())
}

pub async fn delete_slot(state: &AppState, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
            DELETE FROM working_hours
            WHERE id = $1
            "#,
    )
    .bind(id)
    .execute(state.get_pool())
    .await?;

    Ok(())
}
