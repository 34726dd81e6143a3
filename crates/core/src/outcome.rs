//! Three-valued result of a data-access call.
//!
//! Every [`PatientCrud`](crate::PatientCrud) operation answers with one of three indicators:
//! success (with a payload), not found, or anything else. The "anything else" case carries the
//! raw status string so the HTTP layer can echo it back to the client.

use crate::constants::{STATUS_NOT_FOUND, STATUS_SUCCESS};
use std::fmt;

/// Outcome of a data-access call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The call succeeded and produced a payload.
    Success(T),
    /// The requested record does not exist.
    NotFound,
    /// Any other status. The string is the raw status reported by the store.
    Failure(String),
}

impl<T> Outcome<T> {
    /// Builds an outcome from a status sentinel and an optional payload.
    ///
    /// `"success"` with a payload becomes [`Outcome::Success`], `"notFound"` becomes
    /// [`Outcome::NotFound`], and every other combination (including `"success"` without a
    /// payload) becomes [`Outcome::Failure`] carrying the status unchanged.
    pub fn from_status(status: impl Into<String>, payload: Option<T>) -> Self {
        let status = status.into();
        match (status.as_str(), payload) {
            (STATUS_SUCCESS, Some(payload)) => Outcome::Success(payload),
            (STATUS_NOT_FOUND, _) => Outcome::NotFound,
            _ => Outcome::Failure(status),
        }
    }

    /// Wraps an error as a failure outcome, using its display text as the status.
    pub fn failure(err: impl fmt::Display) -> Self {
        Outcome::Failure(err.to_string())
    }

    /// Returns the status sentinel for this outcome.
    pub fn status(&self) -> &str {
        match self {
            Outcome::Success(_) => STATUS_SUCCESS,
            Outcome::NotFound => STATUS_NOT_FOUND,
            Outcome::Failure(status) => status,
        }
    }

    /// Converts into the payload, discarding the status.
    pub fn into_payload(self) -> Option<T> {
        match self {
            Outcome::Success(payload) => Some(payload),
            Outcome::NotFound | Outcome::Failure(_) => None,
        }
    }

}

impl<T, E: fmt::Display> From<Result<Option<T>, E>> for Outcome<T> {
    /// `Ok(Some)` is success, `Ok(None)` is not found and `Err` is a failure.
    fn from(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(payload)) => Outcome::Success(payload),
            Ok(None) => Outcome::NotFound,
            Err(e) => Outcome::failure(e),
        }
    }
}
