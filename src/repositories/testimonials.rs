use crate::{
    repositories::cache,
    state::AppState,
    structs::testimonials::{DbTestimonial, PutTestimonial},
};
use uuid::Uuid;

const CACHE_RESOURCE: &str = "testimonials";
const TESTIMONIAL_COLUMNS: &str = "id, author, company, quote, rating, avatar_url, active";

pub async fn get_testimonials(state: &AppState) -> Result<Vec<DbTestimonial>, sqlx::Error> {
    if let Some(testimonials) = cache::get_list::<DbTestimonial>(state, CACHE_RESOURCE).await {
        return Ok(testimonials);
    }

    let testimonials = sqlx::query_as::<_, DbTestimonial>(&format!(
        "SELECT {} FROM testimonials ORDER BY author",
        TESTIMONIAL_COLUMNS
    ))
    .fetch_all(state.get_pool())
    .await?;

    cache::set_list(state, CACHE_RESOURCE, &testimonials).await;

    Ok(testimonials)
}

pub async fn get_testimonial_by_id(
    state: &AppState,
    id: Uuid,
) -> Result<DbTestimonial, sqlx::Error> {
    sqlx::query_as::<_, DbTestimonial>(&format!(
        "SELECT {} FROM testimonials WHERE id = $1",
        TESTIMONIAL_COLUMNS
    ))
    .bind(id)
    .fetch_one(state.get_pool())
    .await
}

pub async fn create_testimonial(
    state: &AppState,
    testimonial: PutTestimonial,
) -> Result<DbTestimonial, sqlx::Error> {
    let testimonial = sqlx::query_as::<_, DbTestimonial>(&format!(
        r#"
            INSERT INTO testimonials (id, author, company, quote, rating, avatar_url, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
        TESTIMONIAL_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(testimonial.author)
    .bind(testimonial.company)
    .bind(testimonial.quote)
    .bind(testimonial.rating)
    .bind(testimonial.avatar_url)
    .bind(testimonial.active)
    .fetch_one(state.get_pool())
    .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(testimonial)
}

pub async fn update_testimonial(
    state: &AppState,
    id: Uuid,
    testimonial: PutTestimonial,
) -> Result<DbTestimonial, sqlx::Error> {
    let testimonial = sqlx::query_as::<_, DbTestimonial>(&format!(
        r#"
            UPDATE testimonials
            SET author = $1, company = $2, quote = $3, rating = $4, avatar_url = $5, active = $6
            WHERE id = $7
            RETURNING {}
            "#,
        TESTIMONIAL_COLUMNS
    ))
    .bind(testimonial.author)
    .bind(testimonial.company)
    .bind(testimonial.quote)
    .bind(testimonial.rating)
    .bind(testimonial.avatar_url)
    .bind(testimonial.active)
    .bind(id)
    .fetch_one(state.get_pool())
    .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(testimonial)
}

pub async fn delete_testimonial(state: &AppState, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM testimonials WHERE id = $1")
        .bind(id)
        .execute(state.get_pool())
        .await?;

    cache::invalidate_list(state, CACHE_RESOURCE).await;

    Ok(())
}
