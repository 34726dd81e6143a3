//! The HTML intake form and its submission endpoint.

use crate::config::FORM_TEMPLATE;
use crate::extract::ApiJson;
use crate::{ApiError, AppState};
use api_shared::{MedicalForm, SubmitFormRes};
use axum::{
    extract::State,
    response::{Html, Json},
};

pub const FORM_RECEIVED: &str = "Form received successfully";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Intake form page (text/html)"),
        (status = 500, description = "Template missing", body = api_shared::ErrorRes)
    )
)]
/// Render the intake form page.
#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = state.template_dir().join(FORM_TEMPLATE);
    tokio::fs::read_to_string(&path)
        .await
        .map(Html)
        .map_err(|e| ApiError::internal(format!("Template {} unavailable: {}", FORM_TEMPLATE, e)))
}

#[utoipa::path(
    post,
    path = "/submit-form",
    request_body = MedicalForm,
    responses(
        (status = 200, description = "Form stored as a clinical procedure", body = SubmitFormRes),
        (status = 422, description = "Form failed validation", body = api_shared::ErrorRes),
        (status = 500, description = "Store rejected the form", body = api_shared::ErrorRes)
    )
)]
/// Validate an intake form and store it as a clinical procedure.
///
/// The validated form, with defaults applied, is forwarded to the clinical-procedure writer.
#[axum::debug_handler]
pub async fn submit_form(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<MedicalForm>,
) -> Result<Json<SubmitFormRes>, ApiError> {
    let document = form
        .to_document()
        .map_err(|e| ApiError::internal(e.to_string()))?;
    let outcome = state
        .call(move |store| store.write_clinical_procedure(document))
        .await?;
    let id = ApiError::from_write(outcome, "Failed to save form: ")?;
    Ok(Json(SubmitFormRes {
        message: FORM_RECEIVED.into(),
        id,
    }))
}
