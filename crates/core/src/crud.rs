//! The data-access seam behind every HTTP endpoint.

use crate::Outcome;
use serde_json::{Map, Value};

/// Data-access operations over patient, service-request, appointment and clinical-procedure
/// records.
///
/// Implementations own storage, identifier generation and any validation. Callers only observe
/// the returned [`Outcome`]: write operations yield the generated identifier, read operations
/// yield the stored document.
///
/// Implementations must be shareable across request handlers.
pub trait PatientCrud: Send + Sync {
    fn get_patient_by_id(&self, patient_id: &str) -> Outcome<Value>;

    /// Looks up a patient by one of its business identifiers (`identifier[].system` and
    /// `identifier[].value`).
    fn get_patient_by_identifier(&self, system: &str, value: &str) -> Outcome<Value>;

    fn write_patient(&self, patient: Map<String, Value>) -> Outcome<String>;

    /// Returns the service request, or `None` when it cannot be produced for any reason.
    fn read_service_request(&self, service_request_id: &str) -> Option<Value>;

    fn write_service_request(&self, service_request: Value) -> Outcome<String>;

    fn write_appointment(&self, appointment: Value) -> Outcome<String>;

    /// Returns the appointment, or `None` when it cannot be produced for any reason.
    fn read_appointment(&self, appointment_id: &str) -> Option<Value>;

    /// Stores a clinical procedure together with its medications.
    fn write_clinical_procedure(&self, procedure: Value) -> Outcome<String>;
}
