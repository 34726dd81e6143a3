//! # API Shared
//!
//! Shared wire types for the intake APIs.
//!
//! Contains:
//! - The medical intake form payload ([`MedicalForm`], [`Medication`])
//! - JSON response bodies returned by the REST endpoints
//! - Shared services like [`HealthService`]
//!
//! Used by `api-rest` and the CLI.

pub mod forms;
pub mod health;
pub mod responses;

pub use forms::{MedicalForm, Medication};
pub use health::{HealthRes, HealthService};
pub use responses::{CreatedRes, ErrorRes, SubmitFormRes};
