use crate::extract::ApiJson;
use crate::{ApiError, AppState};
use api_shared::CreatedRes;
use axum::{extract::State, response::Json};
use serde_json::Value;

#[utoipa::path(
    post,
    path = "/clinical-procedure",
    responses(
        (status = 200, description = "Procedure and medications stored", body = CreatedRes),
        (status = 500, description = "Store rejected the procedure", body = api_shared::ErrorRes)
    )
)]
/// Store a clinical procedure together with the medications it prescribes.
#[axum::debug_handler]
pub async fn register_clinical_procedure(
    State(state): State<AppState>,
    ApiJson(procedure): ApiJson<Value>,
) -> Result<Json<CreatedRes>, ApiError> {
    let outcome = state
        .call(move |store| store.write_clinical_procedure(procedure))
        .await?;
    let id = ApiError::from_write(
        outcome,
        "Failed to register clinical procedure and medications: ",
    )?;
    Ok(Json(CreatedRes { id }))
}
