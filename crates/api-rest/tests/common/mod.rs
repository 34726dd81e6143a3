//! REST API test harness.
//!
//! Drives the real router in-process with `tower::ServiceExt::oneshot` against either a
//! [`ScriptedStore`] or a [`FileRecordStore`](intake_core::FileRecordStore).

#![allow(dead_code)]

use std::fs;
use std::sync::{Arc, Mutex};

use api_rest::{AppState, ServerConfig};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use intake_core::{Outcome, PatientCrud};
use serde_json::{json, Map, Value};
use tempfile::TempDir;
use tower::ServiceExt;

pub const FORM_PAGE: &str = "<!doctype html><title>Intake</title><form id=\"medical-form\"></form>";

/// A [`PatientCrud`] double that answers every call with the same scripted status and records
/// what it was given.
pub struct ScriptedStore {
    status: String,
    record: Value,
    id: String,
    writes: Mutex<Vec<(&'static str, Value)>>,
    reads: Mutex<Vec<(&'static str, Vec<String>)>>,
}

impl ScriptedStore {
    pub fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            record: json!({
                "resourceType": "Patient",
                "_id": "0f1e2d3c4b5a69788796a5b4c3d2e1f0",
                "name": [{"family": "Valencia", "given": ["Sofia"]}],
                "identifier": [{"system": "urn:cc", "value": "1001"}],
            }),
            id: "0f1e2d3c4b5a69788796a5b4c3d2e1f0".to_string(),
            writes: Mutex::new(Vec::new()),
            reads: Mutex::new(Vec::new()),
        }
    }

    pub fn success() -> Self {
        Self::with_status("success")
    }

    pub fn record(&self) -> &Value {
        &self.record
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn writes(&self) -> Vec<(&'static str, Value)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn reads(&self) -> Vec<(&'static str, Vec<String>)> {
        self.reads.lock().unwrap().clone()
    }

    fn read(&self, op: &'static str, args: &[&str]) -> Outcome<Value> {
        self.reads
            .lock()
            .unwrap()
            .push((op, args.iter().map(|a| a.to_string()).collect()));
        Outcome::from_status(self.status.clone(), Some(self.record.clone()))
    }

    fn write(&self, op: &'static str, document: Value) -> Outcome<String> {
        self.writes.lock().unwrap().push((op, document));
        Outcome::from_status(self.status.clone(), Some(self.id.clone()))
    }
}

impl PatientCrud for ScriptedStore {
    fn get_patient_by_id(&self, patient_id: &str) -> Outcome<Value> {
        self.read("get_patient_by_id", &[patient_id])
    }

    fn get_patient_by_identifier(&self, system: &str, value: &str) -> Outcome<Value> {
        self.read("get_patient_by_identifier", &[system, value])
    }

    fn write_patient(&self, patient: Map<String, Value>) -> Outcome<String> {
        self.write("write_patient", Value::Object(patient))
    }

    fn read_service_request(&self, service_request_id: &str) -> Option<Value> {
        self.read("read_service_request", &[service_request_id])
            .into_payload()
    }

    fn write_service_request(&self, service_request: Value) -> Outcome<String> {
        self.write("write_service_request", service_request)
    }

    fn write_appointment(&self, appointment: Value) -> Outcome<String> {
        self.write("write_appointment", appointment)
    }

    fn read_appointment(&self, appointment_id: &str) -> Option<Value> {
        self.read("read_appointment", &[appointment_id]).into_payload()
    }

    fn write_clinical_procedure(&self, procedure: Value) -> Outcome<String> {
        self.write("write_clinical_procedure", procedure)
    }
}

/// Response captured from the router.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "body is not JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn detail(&self) -> String {
        self.json()["detail"]
            .as_str()
            .expect("error body should carry a detail string")
            .to_string()
    }
}

pub struct TestApp {
    router: Router,
    // Keeps the template and static directories alive for the duration of the test.
    _dirs: TempDir,
}

impl TestApp {
    /// Builds the router over `store` with a template and static directory populated.
    pub fn new(store: Arc<dyn PatientCrud>) -> Self {
        let dirs = TempDir::new().expect("Failed to create temp dir");
        let templates = dirs.path().join("templates");
        let assets = dirs.path().join("static");
        fs::create_dir_all(&templates).unwrap();
        fs::create_dir_all(assets.join("css")).unwrap();
        fs::write(templates.join("medical_form.html"), FORM_PAGE).unwrap();
        fs::write(assets.join("css").join("form.css"), "body { margin: 0; }").unwrap();

        let cfg = ServerConfig::new("127.0.0.1:0".parse().unwrap(), assets, templates);
        Self {
            router: api_rest::router(AppState::new(store, &cfg)),
            _dirs: dirs,
        }
    }

    pub fn without_template(store: Arc<dyn PatientCrud>) -> Self {
        let app = Self::new(store);
        fs::remove_file(app._dirs.path().join("templates").join("medical_form.html")).unwrap();
        app
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("body should be readable")
            .to_bytes()
            .to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.post_raw(uri, &body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.post_as(uri, Some("application/json"), body).await
    }

    /// Posts `body` with the given `Content-Type`, or with none at all.
    pub async fn post_as(&self, uri: &str, content_type: Option<&str>, body: &str) -> TestResponse {
        let mut builder = Request::builder().method(Method::POST).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }
}

/// A complete intake form with an empty medication list.
pub fn minimal_form() -> Value {
    json!({
        "doctorName": "Dr. Andres Gomez",
        "specialty": "General Surgery",
        "institution": "Clinica del Norte",
        "patientName": "Laura Restrepo",
        "documentType": "CC",
        "documentNumber": "43987654",
        "age": 34,
        "sex": "F",
        "mainDiagnosis": "K35.8 Acute appendicitis",
        "procedureDone": "yes",
        "procedureName": "Laparoscopic appendectomy",
        "procedureDate": "2025-05-02",
        "procedureTime": "14:10",
        "procedureDescription": "Three-port laparoscopic appendectomy without complications",
        "medications": [],
    })
}
