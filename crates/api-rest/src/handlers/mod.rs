//! Request handlers, one module per resource.
//!
//! Each handler parses its input, runs one data-access call through
//! [`AppState::call`](crate::AppState::call) and translates the outcome. Handlers keep no state
//! between requests.

pub mod appointment;
pub mod clinical_procedure;
pub mod form;
pub mod health;
pub mod patient;
pub mod service_request;
