//! # API REST
//!
//! REST API for the medical intake record system.
//!
//! Handles:
//! - HTTP endpoints with axum, each delegating to a [`PatientCrud`](intake_core::PatientCrud)
//!   operation and translating its [`Outcome`](intake_core::Outcome) into a status code
//! - The static HTML intake form and its assets
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON error bodies, CORS)
//!
//! Uses `api-shared` for wire types.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router.
///
/// CORS is fully open, credentials included. Static assets are served from the state's static
/// directory under `/static`.
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.static_dir());

    Router::new()
        .route("/", get(handlers::form::index))
        .route("/health", get(handlers::health::health))
        .route(
            "/patient",
            get(handlers::patient::get_patient_by_identifier).post(handlers::patient::add_patient),
        )
        .route("/patient/:patient_id", get(handlers::patient::get_patient_by_id))
        .route(
            "/service-request",
            post(handlers::service_request::add_service_request),
        )
        .route(
            "/service-request/:service_request_id",
            get(handlers::service_request::get_service_request),
        )
        .route("/appointment", post(handlers::appointment::add_appointment))
        .route(
            "/appointment/:appointment_id",
            get(handlers::appointment::get_appointment),
        )
        .route(
            "/clinical-procedure",
            post(handlers::clinical_procedure::register_clinical_procedure),
        )
        .route("/submit-form", post(handlers::form::submit_form))
        .nest_service("/static", static_files)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi::ApiDoc::openapi()))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
