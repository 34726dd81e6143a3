use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::{ApiError, AppState};
use api_shared::CreatedRes;
use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::IntoParams;

const PATIENT_NOT_FOUND: &str = "Patient not found";
const READ_FAILURE: &str = "Internal error. ";
const WRITE_FAILURE: &str = "Validating error: ";

/// Business identifier to look a patient up by.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdentifierQuery {
    /// Namespace of the identifier, for example a national ID registry URI.
    pub system: String,
    pub value: String,
}

#[utoipa::path(
    get,
    path = "/patient/{patient_id}",
    params(("patient_id" = String, Path, description = "Stored patient id")),
    responses(
        (status = 200, description = "Patient document"),
        (status = 404, description = "Patient not found", body = api_shared::ErrorRes),
        (status = 500, description = "Data-access failure", body = api_shared::ErrorRes)
    )
)]
/// Read a patient by its stored id.
#[axum::debug_handler]
pub async fn get_patient_by_id(
    State(state): State<AppState>,
    ApiPath(patient_id): ApiPath<String>,
) -> Result<Json<Value>, ApiError> {
    let outcome = state
        .call(move |store| store.get_patient_by_id(&patient_id))
        .await?;
    ApiError::from_read(outcome, PATIENT_NOT_FOUND, READ_FAILURE).map(Json)
}

#[utoipa::path(
    get,
    path = "/patient",
    params(IdentifierQuery),
    responses(
        (status = 200, description = "Patient document"),
        (status = 400, description = "Missing system or value", body = api_shared::ErrorRes),
        (status = 404, description = "Patient not found", body = api_shared::ErrorRes),
        (status = 500, description = "Data-access failure", body = api_shared::ErrorRes)
    )
)]
/// Find a patient by business identifier.
#[axum::debug_handler]
pub async fn get_patient_by_identifier(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<IdentifierQuery>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!("received {} {}", query.system, query.value);
    let outcome = state
        .call(move |store| store.get_patient_by_identifier(&query.system, &query.value))
        .await?;
    ApiError::from_read(outcome, PATIENT_NOT_FOUND, READ_FAILURE).map(Json)
}

#[utoipa::path(
    post,
    path = "/patient",
    responses(
        (status = 200, description = "Patient stored", body = CreatedRes),
        (status = 422, description = "Body is not a JSON object", body = api_shared::ErrorRes),
        (status = 500, description = "Store rejected the patient", body = api_shared::ErrorRes)
    )
)]
/// Store a patient.
///
/// The body must be a JSON object; it is forwarded to the store unmodified.
#[axum::debug_handler]
pub async fn add_patient(
    State(state): State<AppState>,
    ApiJson(patient): ApiJson<Map<String, Value>>,
) -> Result<Json<CreatedRes>, ApiError> {
    let outcome = state.call(move |store| store.write_patient(patient)).await?;
    let id = ApiError::from_write(outcome, WRITE_FAILURE)?;
    Ok(Json(CreatedRes { id }))
}
