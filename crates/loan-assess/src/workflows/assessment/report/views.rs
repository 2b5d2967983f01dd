use super::super::domain::DocumentTypeTag;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    Received,
    Pending,
}

impl ReceiptStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentStatusEntry {
    pub category: DocumentTypeTag,
    pub category_label: &'static str,
    pub status: ReceiptStatus,
    pub status_label: &'static str,
}

/// Banking-behaviour digest for the report: a sample of detected salary
/// credits and the most recent average balance.
#[derive(Debug, Clone, Serialize)]
pub struct BankingSummaryView {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub salary_credit_sample: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_balance: Option<u64>,
}

/// Presentation-free report data handed to the rendering collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub assessed_on: NaiveDate,
    pub document_status: Vec<DocumentStatusEntry>,
    pub banking: BankingSummaryView,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub probable_queries: Vec<String>,
    pub recommendation: String,
}
