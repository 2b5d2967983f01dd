//! Integration scenarios for the assessment workflow driven entirely
//! through the public crate surface: CSV intake, the assessment service,
//! and the HTTP router.

use std::io::Cursor;
use std::sync::Arc;

use chrono::NaiveDate;
use tower::ServiceExt;

use loan_assess::workflows::assessment::{
    assessment_router, AssessmentService, DocumentText, EligibilityConfig, ReceiptStatus,
};
use loan_assess::workflows::intake::DocumentBatchImporter;

fn assessed_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

fn service() -> AssessmentService {
    AssessmentService::new(EligibilityConfig::default())
}

const BATCH_CSV: &str = "\
File Name,Recognized Text
pan.pdf,\"Permanent Account Number Card
PAN : ABCDE1234F
Name: RAVI KUMAR
12/04/1988\"
march-slip.pdf,\"Pay Slip - March 2024
Basic : Rs. 45,000
Net Pay : Rs. 69,600\"
feb_statement.pdf,\"HDFC BANK STATEMENT
01/02 HOME LOAN EMI Rs. 15,000
05/02 SALARY CREDIT Rs. 85,000
Average Balance : Rs. 45,210\"
";

#[test]
fn csv_batch_flows_through_to_an_eligibility_result() {
    let documents =
        DocumentBatchImporter::from_reader(Cursor::new(BATCH_CSV)).expect("batch imports");
    assert_eq!(documents.len(), 3);

    let outcome = service().assess(&documents, assessed_on());

    assert_eq!(outcome.profile.identity.pan.as_deref(), Some("ABCDE1234F"));
    assert_eq!(outcome.profile.average_balance, Some(45_210));

    let eligibility = outcome.eligibility.expect("net pay present");
    assert_eq!(eligibility.gross_monthly_estimate, 69_600);
    assert_eq!(eligibility.total_existing_emi, 15_000);
    assert_eq!(eligibility.max_allowed_emi, 41_760);
    assert_eq!(eligibility.available_for_new_emi, 26_760);
    assert!(eligibility.approx_max_loan > 0);
}

#[test]
fn documents_processed_in_caller_order_decide_precedence() {
    let first = DocumentText::new(
        "pan-a.pdf".to_string(),
        "PAN : ABCDE1234F\nName: RAVI KUMAR".to_string(),
    );
    let second = DocumentText::new(
        "pan-b.pdf".to_string(),
        "PAN : FGHIJ5678K\nName: SOMEONE ELSE".to_string(),
    );

    let forward = service().assess(&[first.clone(), second.clone()], assessed_on());
    assert_eq!(
        forward.profile.identity.pan.as_deref(),
        Some("ABCDE1234F")
    );

    let reversed = service().assess(&[second, first], assessed_on());
    assert_eq!(
        reversed.profile.identity.pan.as_deref(),
        Some("FGHIJ5678K")
    );
}

#[test]
fn statuses_come_back_pending_for_an_unrelated_batch() {
    let documents = vec![DocumentText::new(
        "notes.txt".to_string(),
        "nothing recognizable in this scan".to_string(),
    )];

    let outcome = service().assess(&documents, assessed_on());
    assert!(outcome
        .report
        .document_status
        .iter()
        .all(|entry| entry.status == ReceiptStatus::Pending));
    assert!(outcome.eligibility.is_none());
}

#[tokio::test]
async fn router_serves_the_assessment_endpoint() {
    let router = assessment_router(Arc::new(service()));

    let payload = serde_json::json!({
        "documents": [
            { "filename": "march-slip.pdf", "text": "Pay Slip\nNet Pay : Rs. 69,600" },
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

    assert_eq!(response.status(), axum::http::StatusCode::OK);
}
