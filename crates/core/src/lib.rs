//! # Intake Core
//!
//! Core data-access layer for the medical intake record system.
//!
//! This crate contains pure data operations:
//! - The [`PatientCrud`] seam every HTTP endpoint delegates to
//! - The three-valued [`Outcome`] status taxonomy returned by that seam
//! - A file-backed development implementation ([`FileRecordStore`]) with sharded JSON storage
//!
//! **No API concerns**: HTTP servers, CORS, templates or wire DTOs belong in `api-rest` or
//! `api-shared`.

pub mod config;
pub mod constants;
pub mod crud;
pub mod error;
pub mod outcome;
pub mod record_id;
pub mod repositories;

pub use config::CoreConfig;
pub use constants::DEFAULT_RECORD_DATA_DIR;
pub use crud::PatientCrud;
pub use error::{ConfigError, StoreError, StoreResult};
pub use outcome::Outcome;
pub use record_id::RecordId;
pub use repositories::collection::Collection;
pub use repositories::records::FileRecordStore;
