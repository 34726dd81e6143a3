use crate::extract::{ApiJson, ApiPath};
use crate::{ApiError, AppState};
use api_shared::CreatedRes;
use axum::{extract::State, response::Json};
use serde_json::Value;

#[utoipa::path(
    post,
    path = "/appointment",
    responses(
        (status = 200, description = "Appointment stored", body = CreatedRes),
        (status = 500, description = "Store rejected the appointment", body = api_shared::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn add_appointment(
    State(state): State<AppState>,
    ApiJson(appointment): ApiJson<Value>,
) -> Result<Json<CreatedRes>, ApiError> {
    let outcome = state
        .call(move |store| store.write_appointment(appointment))
        .await?;
    let id = ApiError::from_write(outcome, "Failed to register appointment: ")?;
    Ok(Json(CreatedRes { id }))
}

#[utoipa::path(
    get,
    path = "/appointment/{appointment_id}",
    params(("appointment_id" = String, Path, description = "Stored appointment id")),
    responses(
        (status = 200, description = "Appointment document"),
        (status = 404, description = "Appointment not found", body = api_shared::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppState>,
    ApiPath(appointment_id): ApiPath<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .call(move |store| store.read_appointment(&appointment_id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Appointment not found"))
}
