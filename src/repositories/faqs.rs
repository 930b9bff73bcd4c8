use crate::{
    repositories::cache,
    state::AppState,
    structs::faqs::{DbFaq, PutFaq},
};
use uuid::Uuid;

const CACHE_RESOURCE: &str = "faqs";

/// 取 faqs 清單，先看快取
pub async fn get_faqs(state: &AppState) -> Result<Vec<DbFaq>, sqlx::Error> {
    if let Some(faqs) = cache::get_list::<DbFaq>(state, CACHE_RESOURCE).await {
        return Ok(faqs);
    }

    let faqs = sqlx::query_as::<_, DbFaq>(
        r#"
            SELECT id, question, answer, sort_order, active
            FROM faqs
            ORDER BY sort_order
            "#,
    )
    .fetch_all(state.get_pool())
    .await?;

    cache::set_list(state, CACHE_RESOURCE, &faqs).await;

    Ok(faqs)
}

pub async fn get_faq_by_id(state: &AppState, id: Uuid) -> Result<DbFaq, sqlx::Error> {
    sqlx::query_as::<_, DbFaq>(
        r#"
            SELECT id, question, answer, sort_order, active
            FROM faqs
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn create_faq(state: &AppState, faq: PutFaq) -> Result<DbFaq, sqlx::Error> {
    let faq = sqlx::query_as::<_, DbFaq>(
        r#"
            INSERT INTO faqs (id, question, answer, sort_order, active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, question, answer, sort_order, active
            "#,
    )
    .bind(Uuid::new_v4())
    .bind(faq.question)
    .bind(faq.answer)
    .bind(faq.sort_order)
    .bind(faq.active)
    .fetch_one(state.get_pool())
    .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(faq)
}

pub async fn update_faq(state: &AppState, id: Uuid, faq: PutFaq) -> Result<DbFaq, sqlx::Error> {
    let faq = sqlx::query_as::<_, DbFaq>(
        r#"
            UPDATE faqs
            SET question = $1, answer = $2, sort_order = $3, active = $4
            WHERE id = $5
            RETURNING id, question, answer, sort_order, active
            "#,
    )
    .bind(faq.question)
    .bind(faq.answer)
    .bind(faq.sort_order)
    .bind(faq.active)
    .bind(id)
    .fetch_one(state.get_pool())
    .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(faq)
}

pub async fn delete_faq(state: &AppState, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM faqs WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(())
}
