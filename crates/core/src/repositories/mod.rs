//! Record storage.
//!
//! This module contains the file-backed implementation of [`PatientCrud`](crate::PatientCrud)
//! and the collection layout it stores records under.

pub mod collection;
pub(crate) mod helpers;
pub mod records;
