use chrono::NaiveDate;
use std::sync::Arc;

use crate::workflows::assessment::domain::DocumentText;
use crate::workflows::assessment::{AssessmentService, EligibilityConfig};

pub(super) fn assessed_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

pub(super) fn eligibility_config() -> EligibilityConfig {
    EligibilityConfig::default()
}

pub(super) fn build_service() -> AssessmentService {
    AssessmentService::new(eligibility_config())
}

pub(super) fn shared_service() -> Arc<AssessmentService> {
    Arc::new(build_service())
}

pub(super) fn doc(filename: &str, text: &str) -> DocumentText {
    DocumentText::new(filename.to_string(), text.to_string())
}

pub(super) fn pan_text() -> &'static str {
    "INCOME TAX DEPARTMENT GOVT. OF INDIA\n\
Permanent Account Number Card\n\
PAN : ABCDE1234F\n\
Name: RAVI KUMAR\n\
12/04/1988"
}

pub(super) fn aadhaar_text() -> &'static str {
    "Unique Identification Authority of India\n\
AADHAAR\n\
2345 6789 0123\n\
Address: 12 MG Road, Indiranagar\n\
BENGALURU 560038"
}

pub(super) fn salary_slip_text(month: &str) -> String {
    format!(
        "ACME TECHNOLOGIES\n\
Pay Slip - {month} 2024\n\
Basic : Rs. 45,000\n\
HRA : Rs. 18,000\n\
Special Allowance : Rs. 12,000\n\
PF : Rs. 5,400\n\
Gross Salary : Rs. 75,000\n\
Net Pay : Rs. 69,600"
    )
}

pub(super) fn bank_statement_text() -> &'static str {
    "HDFC BANK STATEMENT\n\
Account Summary\n\
01/02 HOME LOAN EMI Rs. 15,000\n\
05/02 SALARY CREDIT Rs. 85,000\n\
Average Balance : Rs. 45,210"
}

pub(super) fn form16_text() -> &'static str {
    "Form 16\n\
Certificate under Section 203 of the Income Tax Act\n\
Total Salary : Rs. 12,60,000\n\
Income chargeable under the head Salaries 11,40,000"
}

pub(super) fn cibil_text() -> &'static str {
    "CIBIL TransUnion\n\
Credit Score : 745\n\
Personal loan account closed, no outstanding"
}

pub(super) fn offer_letter_text() -> &'static str {
    "OFFER LETTER\n\
Employer: Acme Technologies Pvt Ltd\n\
Annual CTC Rs. 12,00,000"
}
