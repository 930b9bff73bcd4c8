use crate::{
    state::AppState,
    structs::locations::{CreateLocation, DbLocation, UpdateLocation},
};
use uuid::Uuid;

const LOCATION_COLUMNS: &str = "id, company_id, name, address, city, phone, timezone";

pub async fn get_locations_for_company(
    state: &AppState,
    company_id: Uuid,
) -> Result<Vec<DbLocation>, sqlx::Error> {
    sqlx::query_as::<_, DbLocation>(&format!(
        "SELECT {} FROM locations WHERE company_id = $1 ORDER BY name",
        LOCATION_COLUMNS
    ))
    .bind(company_id)
    .fetch_all(state.get_pool())
    .await
}

pub async fn get_location_by_id(state: &AppState, id: Uuid) -> Result<DbLocation, sqlx::Error> {
    sqlx::query_as::<_, DbLocation>(&format!(
        "SELECT {} FROM locations WHERE id = $1",
        LOCATION_COLUMNS
    ))
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn create_location(
    state: &AppState,
    location: CreateLocation,
) -> Result<DbLocation, sqlx::Error> {
    sqlx::query_as::<_, DbLocation>(&format!(
        r#"
            INSERT INTO locations (id, company_id, name, address, city, phone, timezone)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
        LOCATION_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(location.company_id)
    .bind(location.name)
    .bind(location.address)
    .bind(location.city)
    .bind(location.phone)
    .bind(location.timezone)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_location(
    state: &AppState,
    id: Uuid,
    update: UpdateLocation,
) -> Result<DbLocation, sqlx::Error> {
    let mut location = get_location_by_id(state, id).await?;

    if let Some(name) = update.name {
        location.name = name;
    }
    if let Some(address) = update.address {
        location.address = address;
    }
    if let Some(city) = update.city {
        location.city = Some(city);
    }
    if let Some(phone) = update.phone {
        location.phone = Some(phone);
    }
    if let Some(timezone) = update.timezone {
        location.timezone = Some(timezone);
    }

    sqlx::query_as::<_, DbLocation>(&format!(
        r#"
            UPDATE locations
            SET name = $1, address = $2, city = $3, phone = $4, timezone = $5
            WHERE id = $6
            RETURNING {}
            "#,
        LOCATION_COLUMNS
    ))
    .bind(location.name)
    .bind(location.address)
    .bind(location.city)
    .bind(location.phone)
    .bind(location.timezone)
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn delete_location(state: &AppState, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM locations WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(())
}
