//! API routes

pub mod appointments;
pub mod auth;
pub mod barbers;
pub mod services;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Multipart registration bodies carry the raw image
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Create the application router
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origin);

    Router::new()
        .route(
            "/barbers",
            get(barbers::list_barbers)
                .post(barbers::register_barber)
                .delete(barbers::delete_barber),
        )
        .route("/login", post(auth::login))
        .route(
            "/service",
            get(services::list_services)
                .post(services::create_service)
                .delete(services::delete_service),
        )
        .route(
            "/appointments",
            get(appointments::list_appointments)
                .post(appointments::create_appointment)
                .delete(appointments::delete_appointment),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Cookie-credentialed CORS for the booking frontend
fn cors_layer(origin: &str) -> CorsLayer {
    let origin = origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        tracing::warn!("invalid CORS_ORIGIN, falling back to http://localhost:3000");
        HeaderValue::from_static("http://localhost:3000")
    });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
