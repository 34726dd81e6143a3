mod common;

use std::sync::Arc;

use axum::http::{header, Method, Request, StatusCode};
use common::{minimal_form, ScriptedStore, TestApp, FORM_PAGE};
use serde_json::{json, Value};

#[tokio::test]
async fn test_submit_form_with_empty_medications_returns_id() {
    let store = Arc::new(ScriptedStore::success());
    let res = TestApp::new(store.clone())
        .post_json("/submit-form", &minimal_form())
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        json!({"message": "Form received successfully", "_id": store.id()})
    );
}

#[tokio::test]
async fn test_submit_form_forwards_defaulted_document() {
    let store = Arc::new(ScriptedStore::success());
    let mut form = minimal_form();
    form.as_object_mut().unwrap().remove("medications");

    let res = TestApp::new(store.clone())
        .post_json("/submit-form", &form)
        .await;
    assert_eq!(res.status, StatusCode::OK);

    let writes = store.writes();
    assert_eq!(writes.len(), 1);
    let (op, document) = &writes[0];
    assert_eq!(*op, "write_clinical_procedure");
    assert_eq!(document["medications"], json!([]));
    assert_eq!(document["procedureCode"], Value::Null);
    assert_eq!(document["followUp"], Value::Null);
    assert_eq!(document["patientName"], "Laura Restrepo");
    assert_eq!(document["age"], 34);
}

#[tokio::test]
async fn test_submit_form_keeps_medications() {
    let store = Arc::new(ScriptedStore::success());
    let mut form = minimal_form();
    form["medications"] = json!([
        {"name": "Ketorolac", "dose": "30 mg", "frequency": "q8h", "route": "iv"},
        {"name": "Omeprazole", "dose": "20 mg", "frequency": "daily", "route": "oral"},
    ]);

    TestApp::new(store.clone())
        .post_json("/submit-form", &form)
        .await;

    let (_, document) = &store.writes()[0];
    assert_eq!(document["medications"], form["medications"]);
}

#[tokio::test]
async fn test_submit_form_rejects_missing_field() {
    let store = Arc::new(ScriptedStore::success());
    let mut form = minimal_form();
    form.as_object_mut().unwrap().remove("doctorName");

    let res = TestApp::new(store.clone())
        .post_json("/submit-form", &form)
        .await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(res.detail().contains("doctorName"));
    assert!(store.writes().is_empty());
}

#[tokio::test]
async fn test_submit_form_accepts_age_as_numeric_string() {
    let store = Arc::new(ScriptedStore::success());
    let mut form = minimal_form();
    form["age"] = json!("34");

    let res = TestApp::new(store.clone())
        .post_json("/submit-form", &form)
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(store.writes()[0].1["age"], 34);
}

#[tokio::test]
async fn test_submit_form_store_failure() {
    let store = Arc::new(ScriptedStore::with_status("disk full"));
    let res = TestApp::new(store)
        .post_json("/submit-form", &minimal_form())
        .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.detail(), "Failed to save form: disk full");
}

#[tokio::test]
async fn test_index_renders_form_template() {
    let res = TestApp::new(Arc::new(ScriptedStore::success()))
        .get("/")
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), FORM_PAGE);
    let content_type = res.headers[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_index_without_template_is_500() {
    let res = TestApp::without_template(Arc::new(ScriptedStore::success()))
        .get("/")
        .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.detail().contains("medical_form.html"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let res = TestApp::new(Arc::new(ScriptedStore::success()))
        .get("/static/css/form.css")
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), "body { margin: 0; }");
}

#[tokio::test]
async fn test_health() {
    let res = TestApp::new(Arc::new(ScriptedStore::success()))
        .get("/health")
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({"ok": true, "message": "Intake API is alive"}));
}

#[tokio::test]
async fn test_cors_allows_any_origin_with_credentials() {
    let app = TestApp::new(Arc::new(ScriptedStore::success()));
    let res = app
        .send(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/submit-form")
                .header(header::ORIGIN, "https://intake.example.org")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;

    assert!(res.status.is_success());
    assert_eq!(
        res.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://intake.example.org"
    );
    assert_eq!(res.headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let res = TestApp::new(Arc::new(ScriptedStore::success()))
        .get("/openapi.json")
        .await;

    assert_eq!(res.status, StatusCode::OK);
    let paths = res.json()["paths"].clone();
    for path in [
        "/patient",
        "/patient/{patient_id}",
        "/service-request",
        "/appointment/{appointment_id}",
        "/clinical-procedure",
        "/submit-form",
    ] {
        assert!(paths.get(path).is_some(), "missing {path}");
    }
}
