mod blogs;
mod brands;
mod categories;
mod companies;
mod coupons;
mod faqs;
mod features;
mod images;
mod locations;
mod pages;
mod plans;
mod root;
mod staff;
mod testimonials;
mod users;
mod working_hours;

use crate::state::AppState;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

pub fn app(state: AppState) -> Router {
    // 後台前端的來源，部署時用 ALLOWED_ORIGIN 覆蓋
    let origin = std::env::var("ALLOWED_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:5173".to_string())
        .parse::<HeaderValue>()
        .expect("ALLOWED_ORIGIN 格式錯誤");

    Router::new()
        .route("/", get(root::index))
        .nest("/blogs", blogs::new())
        .nest("/brands", brands::new())
        .nest("/categories", categories::new())
        .nest("/companies", companies::new())
        .nest("/coupons", coupons::new())
        .nest("/faqs", faqs::new())
        .nest("/features", features::new())
        .nest("/images", images::new())
        .nest("/locations", locations::new())
        .nest("/pages", pages::new())
        .nest("/plans", plans::new())
        .nest("/staff", staff::new())
        .nest("/testimonials", testimonials::new())
        .nest("/users", users::new())
        .nest("/working-hours", working_hours::new())
        .fallback(root::handler_404)
        .layer(
            // see https://docs.rs/tower-http/latest/tower_http/cors/index.html
            // for more details
            //
            // pay attention that for some request types like posting content-type: application/json
            // it is required to add ".allow_headers([http::header::CONTENT_TYPE])"
            // or see this issue https://github.com/tokio-rs/axum/issues/849
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_origin(origin)
                .allow_headers([CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024))
        .with_state(state)
}
