use crate::{
    state::AppState,
    structs::staff::{CreateStaff, DbStaff, UpdateStaff},
};
use uuid::Uuid;

const STAFF_COLUMNS: &str = "id, company_id, name, email, phone, title, active";

pub async fn get_staff_for_company(
    state: &AppState,
    company_id: Uuid,
) -> Result<Vec<DbStaff>, sqlx::Error> {
    sqlx::query_as::<_, DbStaff>(&format!(
        "SELECT {} FROM staff WHERE company_id = $1 ORDER BY name",
        STAFF_COLUMNS
    ))
    .bind(company_id)
    .fetch_all(state.get_pool())
    .await
}

pub async fn get_staff_by_id(state: &AppState, id: i64) -> Result<DbStaff, sqlx::Error> {
    sqlx::query_as::<_, DbStaff>(&format!(
        "SELECT {} FROM staff WHERE id = $1",
        STAFF_COLUMNS
    ))
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn create_staff(state: &AppState, staff: CreateStaff) -> Result<DbStaff, sqlx::Error> {
    sqlx::query_as::<_, DbStaff>(&format!(
        r#"
            INSERT INTO staff (company_id, name, email, phone, title, active)
            VALUES ($1, $2, $3, $4, $5, TRUE)
            RETURNING {}
            "#,
        STAFF_COLUMNS
    ))
    .bind(staff.company_id)
    .bind(staff.name)
    .bind(staff.email)
    .bind(staff.phone)
    .bind(staff.title)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_staff(
    state: &AppState,
    id: i64,
    update: UpdateStaff,
) -> Result<DbStaff, sqlx::Error> {
    let mut staff = get_staff_by_id(state, id).await?;

    if let Some(name) = update.name {
        staff.name = name;
    }
    if let Some(email) = update.email {
        staff.email = Some(email);
    }
    if let Some(phone) = update.phone {
        staff.phone = Some(phone);
    }
    if let Some(title) = update.title {
        staff.title = Some(title);
    }
    if let Some(active) = update.active {
        staff.active = active;
    }

    sqlx::query_as::<_, DbStaff>(&format!(
        r#"
            UPDATE staff
            SET name = $1, email = $2, phone = $3, title = $4, active = $5
            WHERE id = $6
            RETURNING {}
            "#,
        STAFF_COLUMNS
    ))
    .bind(staff.name)
    .bind(staff.email)
    .bind(staff.phone)
    .bind(staff.title)
    .bind(staff.active)
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

/// 刪除員工時連同他的工作時間一起清掉
pub async fn delete_staff(state: &AppState, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM working_hours WHERE staff_id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    sqlx::query("DELETE FROM staff WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(())
}
