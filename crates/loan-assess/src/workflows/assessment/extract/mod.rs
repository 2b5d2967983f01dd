//! One field extractor per document category, bound through a lookup table
//! so classification and extraction stay decoupled. Extractors are pure,
//! never fail, and omit fields they cannot find.

pub(crate) mod amount;
mod aadhaar;
mod bank_statement;
mod cibil;
mod employment;
mod form16;
mod pan;
mod property;
mod salary_slip;

use std::collections::BTreeMap;

use crate::workflows::assessment::domain::{
    DocumentTypeTag, ObligationRecord, SalaryComponent,
};

/// Typed facts produced by a single extractor run over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFacts {
    Pan(PanFacts),
    Aadhaar(AadhaarFacts),
    SalarySlip(SalarySlipFacts),
    BankStatement(BankStatementFacts),
    Form16(Form16Facts),
    Cibil(CibilFacts),
    Employment(EmploymentFacts),
    Property(PropertyFacts),
}

impl DocumentFacts {
    pub fn tag(&self) -> DocumentTypeTag {
        match self {
            DocumentFacts::Pan(_) => DocumentTypeTag::Pan,
            DocumentFacts::Aadhaar(_) => DocumentTypeTag::Aadhaar,
            DocumentFacts::SalarySlip(_) => DocumentTypeTag::SalarySlip,
            DocumentFacts::BankStatement(_) => DocumentTypeTag::BankStatement,
            DocumentFacts::Form16(_) => DocumentTypeTag::Form16,
            DocumentFacts::Cibil(_) => DocumentTypeTag::Cibil,
            DocumentFacts::Employment(_) => DocumentTypeTag::Employment,
            DocumentFacts::Property(_) => DocumentTypeTag::Property,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanFacts {
    pub pan: Option<String>,
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AadhaarFacts {
    pub aadhaar: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalarySlipFacts {
    pub components: BTreeMap<SalaryComponent, u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankStatementFacts {
    pub obligations: Vec<ObligationRecord>,
    pub salary_credits: Vec<u64>,
    pub average_balance: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form16Facts {
    pub total_salary: Option<u64>,
    pub taxable_income: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CibilFacts {
    pub score: Option<u16>,
    pub loan_history: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmploymentFacts {
    pub employer: Option<String>,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFacts {
    pub notes: String,
}

/// Lookup table binding each tag to its extractor.
pub fn extractor_for(tag: DocumentTypeTag) -> fn(&str) -> DocumentFacts {
    match tag {
        DocumentTypeTag::Pan => pan::extract,
        DocumentTypeTag::Aadhaar => aadhaar::extract,
        DocumentTypeTag::SalarySlip => salary_slip::extract,
        DocumentTypeTag::BankStatement => bank_statement::extract,
        DocumentTypeTag::Form16 => form16::extract,
        DocumentTypeTag::Cibil => cibil::extract,
        DocumentTypeTag::Employment => employment::extract,
        DocumentTypeTag::Property => property::extract,
    }
}
