use crate::{
    errors::AppError,
    repositories::testimonials,
    state::AppState,
    structs::testimonials::{DbTestimonial, PutTestimonial},
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_testimonials).post(create_testimonial))
        .route(
            "/{id}",
            get(get_testimonial)
                .put(update_testimonial)
                .delete(delete_testimonial),
        )
}

fn check_rating(rating: i16) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation("rating 必須在 1 到 5 之間".to_string()));
    }

    Ok(())
}

async fn get_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<DbTestimonial>>, AppError> {
    let testimonials = testimonials::get_testimonials(&state).await?;

    Ok(Json(testimonials))
}

async fn get_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DbTestimonial>, AppError> {
    let testimonial = testimonials::get_testimonial_by_id(&state, id).await?;

    Ok(Json(testimonial))
}

async fn create_testimonial(
    State(state): State<AppState>,
    Json(testimonial): Json<PutTestimonial>,
) -> Result<Json<DbTestimonial>, AppError> {
    check_rating(testimonial.rating)?;

    let testimonial = testimonials::create_testimonial(&state, testimonial).await?;

    Ok(Json(testimonial))
}

async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(testimonial): Json<PutTestimonial>,
) -> Result<Json<DbTestimonial>, AppError> {
    check_rating(testimonial.rating)?;

    let testimonial = testimonials::update_testimonial(&state, id, testimonial).await?;

    Ok(Json(testimonial))
}

async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    testimonials::delete_testimonial(&state, id).await?;

    Ok(Json(()))
}
