use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::workflows::assessment::router::{
    assess_handler, AssessmentRequest, DocumentUpload,
};
use crate::workflows::assessment::assessment_router;

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn assess_handler_returns_outcome_for_a_batch() {
    let service = shared_service();
    let request = AssessmentRequest {
        documents: vec![DocumentUpload {
            filename: "pan.pdf".to_string(),
            text: pan_text().to_string(),
        }],
        assessed_on: Some(assessed_on()),
    };

    let response = assess_handler(State(service), axum::Json(request)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["profile"]["identity"]["pan"], "ABCDE1234F");
    assert_eq!(body["report"]["assessed_on"], "2024-06-01");
    assert!(body["eligibility"].is_null());
}

#[tokio::test]
async fn assessment_route_accepts_json_payloads() {
    let router = assessment_router(shared_service());

    let payload = json!({
        "documents": [
            { "filename": "form16.pdf", "text": form16_text() },
            { "filename": "feb_statement.pdf", "text": bank_statement_text() },
        ],
        "assessed_on": "2024-06-01",
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/loan/assessments")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&payload).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["eligibility"]["gross_monthly_estimate"], 105_000);
    assert_eq!(body["eligibility"]["total_existing_emi"], 15_000);
    assert!(body["report"]["recommendation"]
        .as_str()
        .unwrap()
        .contains("appears eligible"));
}

#[tokio::test]
async fn malformed_payloads_are_rejected_by_the_extractor() {
    let router = assessment_router(shared_service());

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/loan/assessments")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{\"documents\": 42}"))
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
