use crate::{
    state::AppState,
    structs::{
        companies::{DbCompany, RegisterRequest, RegisterResponse, UpdateCompany},
        locations::DbLocation,
        users::{User, ROLE_ADMIN},
        working_hours::WEEKDAY_NAMES,
    },
};
use chrono::NaiveTime;
use uuid::Uuid;

const COMPANY_COLUMNS: &str = "id, name, slug, industry, phone, owner_user_id, created_at";

pub async fn get_companies(state: &AppState) -> Result<Vec<DbCompany>, sqlx::Error> {
    sqlx::query_as::<_, DbCompany>(&format!(
        "SELECT {} FROM companies ORDER BY created_at DESC",
        COMPANY_COLUMNS
    ))
    .fetch_all(state.get_pool())
    .await
}

pub async fn get_company_by_id(state: &AppState, id: Uuid) -> Result<DbCompany, sqlx::Error> {
    sqlx::query_as::<_, DbCompany>(&format!(
        "SELECT {} FROM companies WHERE id = $1",
        COMPANY_COLUMNS
    ))
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_company(
    state: &AppState,
    id: Uuid,
    update: UpdateCompany,
) -> Result<DbCompany, sqlx::Error> {
    let mut company = get_company_by_id(state, id).await?;

    if let Some(name) = update.name {
        company.name = name;
    }
    if let Some(slug) = update.slug {
        company.slug = slug;
    }
    if let Some(industry) = update.industry {
        company.industry = Some(industry);
    }
    if let Some(phone) = update.phone {
        company.phone = Some(phone);
    }

    sqlx::query_as::<_, DbCompany>(&format!(
        r#"
            UPDATE companies
            SET name = $1, slug = $2, industry = $3, phone = $4
            WHERE id = $5
            RETURNING {}
            "#,
        COMPANY_COLUMNS
    ))
    .bind(company.name)
    .bind(company.slug)
    .bind(company.industry)
    .bind(company.phone)
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

/// 刪公司時連同底下的據點、員工、工作時間一起清掉
pub async fn delete_company(state: &AppState, id: Uuid) -> Result<(), sqlx::Error> {
    let mut tx = state.get_pool().begin().await?;

    sqlx::query("DELETE FROM working_hours WHERE company_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM staff WHERE company_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM locations WHERE company_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM companies WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}

/// 註冊精靈：同一個交易裡建負責人帳號、公司、第一個據點，
/// 並帶一套週一到週五 09:00-17:00 的預設工作時間
pub async fn register_company(
    state: &AppState,
    req: RegisterRequest,
    owner_password_hash: &str,
) -> Result<RegisterResponse, sqlx::Error> {
    let mut tx = state.get_pool().begin().await?;

    let owner = sqlx::query_as::<_, User>(
        r#"
            INSERT INTO users (name, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role;
        "#,
    )
    .bind(&req.owner.name)
    .bind(&req.owner.email)
    .bind(owner_password_hash)
    .bind(ROLE_ADMIN)
    .fetch_one(&mut *tx)
    .await?;

    let company = sqlx::query_as::<_, DbCompany>(&format!(
        r#"
            INSERT INTO companies (id, name, slug, industry, phone, owner_user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING {}
            "#,
        COMPANY_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(&req.company.name)
    .bind(&req.company.slug)
    .bind(&req.company.industry)
    .bind(&req.company.phone)
    .bind(owner.id)
    .fetch_one(&mut *tx)
    .await?;

    let location = sqlx::query_as::<_, DbLocation>(
        r#"
            INSERT INTO locations (id, company_id, name, address, city, phone, timezone)
            VALUES ($1, $2, $3, $4, $5, NULL, NULL)
            RETURNING id, company_id, name, address, city, phone, timezone
            "#,
    )
    .bind(Uuid::new_v4())
    .bind(company.id)
    .bind(&req.location.name)
    .bind(&req.location.address)
    .bind(&req.location.city)
    .fetch_one(&mut *tx)
    .await?;

    let default_start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let default_end = NaiveTime::from_hms_opt(17, 0, 0).unwrap();

    // WEEKDAY_NAMES[1..=5] 是週一到週五
    for day_name in WEEKDAY_NAMES[1..=5].iter().copied() {
        sqlx::query(
            r#"
                INSERT INTO working_hours (company_id, staff_id, day_of_week, start_time, end_time, is_break)
                VALUES ($1, NULL, $2, $3, $4, FALSE)
                "#,
        )
        .bind(company.id)
        .bind(day_name)
        .bind(default_start)
        .bind(default_end)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(RegisterResponse {
        company,
        owner,
        location,
    })
}
