use crate::{state::AppState, structs::users::User};
use sqlx::Error;

pub async fn get_users(state: &AppState) -> Result<Vec<User>, Error> {
    sqlx::query_as("SELECT id, name, email, role FROM users ORDER BY id")
        .fetch_all(state.get_pool())
        .await
}

pub async fn get_user_by_id(state: &AppState, id: i64) -> Result<User, Error> {
    sqlx::query_as("SELECT id, name, email, role FROM users WHERE id = $1")
        .bind(id)
        .fetch_one(state.get_pool())
        .await
}

/// 建帳號前檢查 email 有沒有被用過
pub async fn get_user_by_email(state: &AppState, email: &str) -> Result<Option<User>, Error> {
    sqlx::query_as(
        r#"
            SELECT
                id,
                name,
                email,
                role
            FROM
                users
            WHERE
                email = $1
            LIMIT
                1;
        "#,
    )
    .bind(email)
    .fetch_optional(state.get_pool())
    .await
}

/// password 必須已經 hash 過才能進來
pub async fn create_user(
    state: &AppState,
    name: &str,
    email: &str,
    password_hash: &str,
    role: &str,
) -> Result<User, Error> {
    sqlx::query_as(
        r#"
            INSERT INTO users (name, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role;
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_one(state.get_pool())
    .await
}

pub async fn update_user(
    state: &AppState,
    id: i64,
    name: Option<String>,
    email: Option<String>,
    password_hash: Option<String>,
    role: Option<String>,
) -> Result<User, Error> {
    sqlx::query_as(
        r#"
            UPDATE users
            SET name = COALESCE($1, name),
                email = COALESCE($2, email),
                password = COALESCE($3, password),
                role = COALESCE($4, role)
            WHERE id = $5
            RETURNING id, name, email, role;
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn delete_user(state: &AppState, id: i64) -> Result<(), Error> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    Ok(())
}
