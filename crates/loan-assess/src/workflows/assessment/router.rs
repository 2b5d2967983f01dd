use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::domain::DocumentText;
use super::service::AssessmentService;

/// Router builder exposing the assessment endpoint. The payload carries
/// pre-extracted text only; OCR and file handling live with the
/// acquisition collaborator.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/loan/assessments", post(assess_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) documents: Vec<DocumentUpload>,
    #[serde(default)]
    pub(crate) assessed_on: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DocumentUpload {
    pub(crate) filename: String,
    pub(crate) text: String,
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response {
    let documents: Vec<DocumentText> = request
        .documents
        .into_iter()
        .map(|upload| DocumentText::new(upload.filename, upload.text))
        .collect();

    let assessed_on = request
        .assessed_on
        .unwrap_or_else(|| Local::now().date_naive());

    let outcome = service.assess(&documents, assessed_on);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}
