//! Document assessment pipeline: classification, field extraction, profile
//! aggregation, FOIR eligibility, and the derived status/query report.

pub mod classify;
pub mod domain;
pub(crate) mod eligibility;
pub mod extract;
mod income;
mod normalizer;
mod profile;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use classify::{classify, filename_hints};
pub use domain::{
    ApplicantProfile, DocumentText, DocumentTypeTag, Form16Summary, IdentitySummary,
    ObligationRecord, SalaryBreakdown, SalaryComponent,
};
pub use eligibility::{EligibilityConfig, EligibilityEngine, EligibilityResult};
pub use extract::{extractor_for, DocumentFacts};
pub use income::{gross_monthly_estimate, total_existing_emi};
pub use profile::ProfileAggregator;
pub use report::views::{
    AssessmentReport, BankingSummaryView, DocumentStatusEntry, ReceiptStatus,
};
pub use router::assessment_router;
pub use service::{AssessmentOutcome, AssessmentService};
