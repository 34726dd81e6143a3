//! JSON response bodies returned by the REST endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned after a record has been written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedRes {
    /// Identifier generated by the store.
    #[serde(rename = "_id")]
    pub id: String,
}

/// Body returned after the intake form has been stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmitFormRes {
    pub message: String,
    /// Identifier of the stored clinical procedure.
    #[serde(rename = "_id")]
    pub id: String,
}

/// Error body. Every non-2xx response carries one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub detail: String,
}
