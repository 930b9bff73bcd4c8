use crate::{
    errors::AppError,
    repositories::staff,
    state::AppState,
    structs::staff::{CreateStaff, DbStaff, StaffQuery, UpdateStaff},
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_staff_list).post(create_staff))
        .route(
            "/{id}",
            get(get_staff).put(update_staff).delete(delete_staff),
        )
}

/// 取某間公司的員工清單
async fn get_staff_list(
    Query(query): Query<StaffQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<DbStaff>>, AppError> {
    let staff = staff::get_staff_for_company(&state, query.company_id).await?;

    Ok(Json(staff))
}

async fn get_staff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DbStaff>, AppError> {
    let staff = staff::get_staff_by_id(&state, id).await?;

    Ok(Json(staff))
}

async fn create_staff(
    State(state): State<AppState>,
    Json(staff): Json<CreateStaff>,
) -> Result<Json<DbStaff>, AppError> {
    let staff = staff::create_staff(&state, staff).await?;

    Ok(Json(staff))
}

async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<UpdateStaff>,
) -> Result<Json<DbStaff>, AppError> {
    let staff = staff::update_staff(&state, id, update).await?;

    Ok(Json(staff))
}

async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<()>, AppError> {
    staff::delete_staff(&state, id).await?;

    Ok(Json(()))
}
