use crate::extract::{ApiJson, ApiPath};
use crate::{ApiError, AppState};
use api_shared::CreatedRes;
use axum::{extract::State, response::Json};
use serde_json::Value;

#[utoipa::path(
    get,
    path = "/service-request/{service_request_id}",
    params(("service_request_id" = String, Path, description = "Stored service request id")),
    responses(
        (status = 200, description = "Service request document"),
        (status = 404, description = "Service request not found", body = api_shared::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_service_request(
    State(state): State<AppState>,
    ApiPath(service_request_id): ApiPath<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .call(move |store| store.read_service_request(&service_request_id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Service request not found"))
}

#[utoipa::path(
    post,
    path = "/service-request",
    responses(
        (status = 200, description = "Service request stored", body = CreatedRes),
        (status = 500, description = "Store rejected the service request", body = api_shared::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn add_service_request(
    State(state): State<AppState>,
    ApiJson(service_request): ApiJson<Value>,
) -> Result<Json<CreatedRes>, ApiError> {
    let outcome = state
        .call(move |store| store.write_service_request(service_request))
        .await?;
    let id = ApiError::from_write(outcome, "Failed to register service request: ")?;
    Ok(Json(CreatedRes { id }))
}
