use crate::{
    errors::AppError,
    repositories::users,
    state::AppState,
    structs::users::{CreateUser, UpdateUser, User, ROLE_ADMIN, ROLE_EDITOR},
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use bcrypt::{hash, DEFAULT_COST};

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

fn check_role(role: &str) -> Result<(), AppError> {
    if role != ROLE_ADMIN && role != ROLE_EDITOR {
        return Err(AppError::Validation(format!(
            "role 必須是 {} 或 {}",
            ROLE_ADMIN, ROLE_EDITOR
        )));
    }

    Ok(())
}

fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|err| AppError::Validation(format!("密碼處理失敗: {}", err)))
}

/// 取 users 清單
async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let result = users::get_users(&state).await?;

    Ok(Json(result))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = users::get_user_by_id(&state, id).await?;

    Ok(Json(user))
}

async fn create_user(
    State(state): State<AppState>,
    Json(new_user): Json<CreateUser>,
) -> Result<Json<User>, AppError> {
    check_role(&new_user.role)?;

    if let Some(existing) = users::get_user_by_email(&state, &new_user.email).await? {
        return Err(AppError::Validation(format!(
            "email {} 已被使用",
            existing.email
        )));
    }

    let password_hash = hash_password(&new_user.password)?;

    let user = users::create_user(
        &state,
        &new_user.name,
        &new_user.email,
        &password_hash,
        &new_user.role,
    )
    .await?;

    Ok(Json(user))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<UpdateUser>,
) -> Result<Json<User>, AppError> {
    if let Some(role) = &update.role {
        check_role(role)?;
    }

    // 有帶新密碼才重新 hash
    let password_hash = match &update.password {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    let user = users::update_user(
        &state,
        id,
        update.name,
        update.email,
        password_hash,
        update.role,
    )
    .await?;

    Ok(Json(user))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<()>, AppError> {
    users::delete_user(&state, id).await?;

    Ok(Json(()))
}
