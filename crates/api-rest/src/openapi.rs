use crate::handlers::{appointment, clinical_procedure, form, health, patient, service_request};
use api_shared::{CreatedRes, ErrorRes, HealthRes, MedicalForm, Medication, SubmitFormRes};
use utoipa::OpenApi;

/// OpenAPI document served at `/openapi.json` and rendered at `/docs`.
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        form::index,
        form::submit_form,
        patient::get_patient_by_id,
        patient::get_patient_by_identifier,
        patient::add_patient,
        service_request::get_service_request,
        service_request::add_service_request,
        appointment::add_appointment,
        appointment::get_appointment,
        clinical_procedure::register_clinical_procedure,
    ),
    components(schemas(
        HealthRes,
        CreatedRes,
        SubmitFormRes,
        ErrorRes,
        MedicalForm,
        Medication,
    ))
)]
pub struct ApiDoc;
