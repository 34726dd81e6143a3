//! File-backed record store.
//!
//! [`FileRecordStore`] is the development implementation of [`PatientCrud`]. It keeps one JSON
//! document per record:
//!
//! ```text
//! record_data/
//!   patients/
//!     <s1>/
//!       <s2>/
//!         <id>/
//!           record.json
//!   service_requests/...
//!   appointments/...
//!   clinical_procedures/...
//! ```
//!
//! Documents are stored as received plus an `_id` field holding the generated identifier. There
//! is no schema and no index; identifier lookup is a linear scan of the patients collection.

use super::collection::Collection;
use super::helpers::{create_unique_sharded_dir, list_record_dirs, read_record, write_record};
use crate::constants::{ID_FIELD, PATIENT_RESOURCE_TYPE};
use crate::{CoreConfig, Outcome, PatientCrud, RecordId, StoreError, StoreResult};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};

/// JSON-file implementation of [`PatientCrud`].
#[derive(Clone, Debug)]
pub struct FileRecordStore {
    cfg: Arc<CoreConfig>,
    write_lock: Arc<Mutex<()>>,
}

impl FileRecordStore {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Stores `document` in `collection` under a freshly generated id.
    ///
    /// Object documents get an `_id` field set to the new id. Non-object documents are stored as
    /// `{"_id": ..., "document": <value>}` so that every stored record carries its id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the record directory cannot be allocated or the file cannot be
    /// written.
    pub fn insert(&self, collection: Collection, document: Value) -> StoreResult<RecordId> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;

        let base = self.cfg.collection_dir(collection);
        let (id, record_dir) = create_unique_sharded_dir(&base, RecordId::new)?;

        let mut stored = match document {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("document".into(), other);
                map
            }
        };
        stored.insert(ID_FIELD.into(), Value::String(id.to_string()));

        if let Err(e) = write_record(&record_dir, &Value::Object(stored)) {
            if let Err(cleanup) = std::fs::remove_dir_all(&record_dir) {
                tracing::warn!(
                    "failed to clean up {} after write error: {}",
                    record_dir.display(),
                    cleanup
                );
            }
            return Err(e);
        }

        tracing::debug!("stored {} record {}", collection, id);
        Ok(id)
    }

    /// Reads a record by id.
    ///
    /// Returns `Ok(None)` for ids that are not canonical or have no stored record.
    pub fn get(&self, collection: Collection, id: &str) -> StoreResult<Option<Value>> {
        let Ok(id) = RecordId::parse(id) else {
            return Ok(None);
        };
        read_record(&id.sharded_dir(&self.cfg.collection_dir(collection)))
    }

    /// Lists the ids stored in `collection`, sorted.
    pub fn list(&self, collection: Collection) -> Vec<RecordId> {
        list_record_dirs(&self.cfg.collection_dir(collection))
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    /// Returns the first patient whose `identifier` array has an entry matching both `system`
    /// and `value`.
    pub fn find_patient_by_identifier(&self, system: &str, value: &str) -> Option<Value> {
        list_record_dirs(&self.cfg.collection_dir(Collection::Patients))
            .into_iter()
            .filter_map(|(_, dir)| match read_record(&dir) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("skipping unreadable patient {}: {}", dir.display(), e);
                    None
                }
            })
            .find(|patient| has_identifier(patient, system, value))
    }
}

fn has_identifier(patient: &Value, system: &str, value: &str) -> bool {
    patient
        .get("identifier")
        .and_then(Value::as_array)
        .is_some_and(|identifiers| {
            identifiers.iter().any(|identifier| {
                identifier.get("system").and_then(Value::as_str) == Some(system)
                    && identifier.get("value").and_then(Value::as_str) == Some(value)
            })
        })
}

fn check_patient_resource_type(patient: &Map<String, Value>) -> StoreResult<()> {
    match patient.get("resourceType") {
        None => Ok(()),
        Some(Value::String(kind)) if kind == PATIENT_RESOURCE_TYPE => Ok(()),
        Some(_) => Err(StoreError::InvalidDocument(format!(
            "resourceType must be {}",
            PATIENT_RESOURCE_TYPE
        ))),
    }
}

impl PatientCrud for FileRecordStore {
    fn get_patient_by_id(&self, patient_id: &str) -> Outcome<Value> {
        self.get(Collection::Patients, patient_id).into()
    }

    fn get_patient_by_identifier(&self, system: &str, value: &str) -> Outcome<Value> {
        match self.find_patient_by_identifier(system, value) {
            Some(patient) => Outcome::Success(patient),
            None => Outcome::NotFound,
        }
    }

    fn write_patient(&self, patient: Map<String, Value>) -> Outcome<String> {
        let result = check_patient_resource_type(&patient)
            .and_then(|()| self.insert(Collection::Patients, Value::Object(patient)));
        match result {
            Ok(id) => Outcome::Success(id.to_string()),
            Err(StoreError::InvalidDocument(reason)) => Outcome::Failure(reason),
            Err(e) => Outcome::failure(e),
        }
    }

    fn read_service_request(&self, service_request_id: &str) -> Option<Value> {
        self.get(Collection::ServiceRequests, service_request_id)
            .unwrap_or_else(|e| {
                tracing::warn!("failed to read service request {}: {}", service_request_id, e);
                None
            })
    }

    fn write_service_request(&self, service_request: Value) -> Outcome<String> {
        self.insert(Collection::ServiceRequests, service_request)
            .map(|id| Some(id.to_string()))
            .into()
    }

    fn write_appointment(&self, appointment: Value) -> Outcome<String> {
        self.insert(Collection::Appointments, appointment)
            .map(|id| Some(id.to_string()))
            .into()
    }

    fn read_appointment(&self, appointment_id: &str) -> Option<Value> {
        self.get(Collection::Appointments, appointment_id)
            .unwrap_or_else(|e| {
                tracing::warn!("failed to read appointment {}: {}", appointment_id, e);
                None
            })
    }

    fn write_clinical_procedure(&self, procedure: Value) -> Outcome<String> {
        self.insert(Collection::ClinicalProcedures, procedure)
            .map(|id| Some(id.to_string()))
            .into()
    }
}
