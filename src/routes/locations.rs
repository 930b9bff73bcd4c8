use crate::{
    errors::AppError,
    repositories::locations,
    state::AppState,
    structs::locations::{CreateLocation, DbLocation, LocationQuery, UpdateLocation},
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_locations).post(create_location))
        .route(
            "/{id}",
            get(get_location).put(update_location).delete(delete_location),
        )
}

async fn get_locations(
    Query(query): Query<LocationQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<DbLocation>>, AppError> {
    let locations = locations::get_locations_for_company(&state, query.company_id).await?;

    Ok(Json(locations))
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DbLocation>, AppError> {
    let location = locations::get_location_by_id(&state, id).await?;

    Ok(Json(location))
}

async fn create_location(
    State(state): State<AppState>,
    Json(location): Json<CreateLocation>,
) -> Result<Json<DbLocation>, AppError> {
    let location = locations::create_location(&state, location).await?;

    Ok(Json(location))
}

async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateLocation>,
) -> Result<Json<DbLocation>, AppError> {
    let location = locations::update_location(&state, id, update).await?;

    Ok(Json(location))
}

async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    locations::delete_location(&state, id).await?;

    Ok(Json(()))
}
