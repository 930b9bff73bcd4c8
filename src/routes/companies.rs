use crate::{
    errors::AppError,
    repositories::companies,
    state::AppState,
    structs::companies::{DbCompany, RegisterRequest, RegisterResponse, UpdateCompany},
};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use bcrypt::{hash, DEFAULT_COST};
use uuid::Uuid;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_companies))
        .route("/register", post(register_company))
        .route(
            "/{id}",
            get(get_company).put(update_company).delete(delete_company),
        )
}

/// 取 companies 清單
async fn get_companies(State(state): State<AppState>) -> Result<Json<Vec<DbCompany>>, AppError> {
    let companies = companies::get_companies(&state).await?;

    Ok(Json(companies))
}

async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DbCompany>, AppError> {
    let company = companies::get_company_by_id(&state, id).await?;

    Ok(Json(company))
}

async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateCompany>,
) -> Result<Json<DbCompany>, AppError> {
    let company = companies::update_company(&state, id, update).await?;

    Ok(Json(company))
}

async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    companies::delete_company(&state, id).await?;

    Ok(Json(()))
}

/// 註冊精靈的最後一步送進來，整包一次建好
async fn register_company(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    if req.owner.password.len() < 8 {
        return Err(AppError::Validation("密碼至少要 8 碼".to_string()));
    }

    let password_hash = hash(&req.owner.password, DEFAULT_COST)
        .map_err(|err| AppError::Validation(format!("密碼處理失敗: {}", err)))?;

    let result = companies::register_company(&state, req, &password_hash).await?;

    tracing::info!("新公司註冊完成: {}", result.company.slug);

    Ok(Json(result))
}
