use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::normalizer::scrub_text;

/// One uploaded file's recognized text, as handed over by the
/// text-acquisition collaborator. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentText {
    pub filename: String,
    pub text: String,
}

impl DocumentText {
    pub fn new(filename: String, text: String) -> Self {
        Self {
            filename,
            text: scrub_text(&text),
        }
    }
}

/// Document categories recognized by the classifier. A document may carry
/// several tags at once; the declaration order is the deterministic
/// dispatch order for extraction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentTypeTag {
    Pan,
    Aadhaar,
    SalarySlip,
    BankStatement,
    Form16,
    Cibil,
    Employment,
    Property,
}

impl DocumentTypeTag {
    pub fn ordered() -> [DocumentTypeTag; 8] {
        [
            DocumentTypeTag::Pan,
            DocumentTypeTag::Aadhaar,
            DocumentTypeTag::SalarySlip,
            DocumentTypeTag::BankStatement,
            DocumentTypeTag::Form16,
            DocumentTypeTag::Cibil,
            DocumentTypeTag::Employment,
            DocumentTypeTag::Property,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            DocumentTypeTag::Pan => "PAN",
            DocumentTypeTag::Aadhaar => "Aadhaar",
            DocumentTypeTag::SalarySlip => "Salary Slips (3 months)",
            DocumentTypeTag::BankStatement => "Bank Statement",
            DocumentTypeTag::Form16 => "Form-16",
            DocumentTypeTag::Cibil => "CIBIL",
            DocumentTypeTag::Employment => "Employment Proof",
            DocumentTypeTag::Property => "Property Documents",
        }
    }
}

/// Fixed salary-slip component vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SalaryComponent {
    #[serde(rename = "Basic")]
    Basic,
    #[serde(rename = "HRA")]
    Hra,
    #[serde(rename = "Special Allowance")]
    SpecialAllowance,
    #[serde(rename = "Gross")]
    Gross,
    #[serde(rename = "Net Pay")]
    NetPay,
    #[serde(rename = "PF")]
    Pf,
}

impl SalaryComponent {
    pub const fn label(self) -> &'static str {
        match self {
            SalaryComponent::Basic => "Basic",
            SalaryComponent::Hra => "HRA",
            SalaryComponent::SpecialAllowance => "Special Allowance",
            SalaryComponent::Gross => "Gross",
            SalaryComponent::NetPay => "Net Pay",
            SalaryComponent::Pf => "PF",
        }
    }
}

/// One month's salary breakdown as extracted from a single slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryBreakdown {
    pub source: String,
    pub components: BTreeMap<SalaryComponent, u64>,
}

/// An EMI/loan line lifted from a bank statement. The raw line is kept even
/// when no amount could be parsed so it can be surfaced for manual review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObligationRecord {
    pub description: String,
    pub monthly_amount: Option<u64>,
}

/// Scalar identity fields. Each holds at most one value; the aggregator
/// fills them first-write-wins across documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentitySummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhaar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,
}

/// Form-16 figures retained for income derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Form16Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_salary: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable_income: Option<u64>,
}

/// The merged applicant record built from one assessment batch. Discarded
/// once the eligibility/report data has been produced; nothing persists
/// across runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicantProfile {
    pub identity: IdentitySummary,
    pub salary_slips: Vec<SalaryBreakdown>,
    pub obligations: Vec<ObligationRecord>,
    pub salary_credits: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_balance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cibil_score: Option<u16>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub loan_history: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form16: Option<Form16Summary>,
    pub received: BTreeSet<DocumentTypeTag>,
    pub document_names: Vec<String>,
    #[serde(skip_serializing)]
    pub combined_text: String,
}
