pub mod views;

use chrono::NaiveDate;

use super::domain::{ApplicantProfile, DocumentTypeTag};
use super::eligibility::EligibilityResult;
use super::income;
use views::{AssessmentReport, BankingSummaryView, DocumentStatusEntry, ReceiptStatus};

const SALARY_CREDIT_SAMPLE_LEN: usize = 3;

pub(crate) fn build_report(
    profile: &ApplicantProfile,
    eligibility: Option<&EligibilityResult>,
    assessed_on: NaiveDate,
) -> AssessmentReport {
    AssessmentReport {
        assessed_on,
        document_status: document_status(profile),
        banking: banking_summary(profile),
        probable_queries: probable_queries(profile),
        recommendation: recommendation(eligibility),
    }
}

fn document_status(profile: &ApplicantProfile) -> Vec<DocumentStatusEntry> {
    DocumentTypeTag::ordered()
        .into_iter()
        .map(|category| {
            let status = if profile.received.contains(&category) {
                ReceiptStatus::Received
            } else {
                ReceiptStatus::Pending
            };

            DocumentStatusEntry {
                category,
                category_label: category.label(),
                status,
                status_label: status.label(),
            }
        })
        .collect()
}

fn banking_summary(profile: &ApplicantProfile) -> BankingSummaryView {
    BankingSummaryView {
        salary_credit_sample: profile
            .salary_credits
            .iter()
            .take(SALARY_CREDIT_SAMPLE_LEN)
            .copied()
            .collect(),
        average_balance: profile.average_balance,
    }
}

fn probable_queries(profile: &ApplicantProfile) -> Vec<String> {
    let mut queries = Vec::new();

    if !profile.received.contains(&DocumentTypeTag::Pan) {
        queries.push("PAN copy missing - request PAN card.".to_string());
    }
    if !profile.received.contains(&DocumentTypeTag::Aadhaar) {
        queries.push("Aadhaar missing - request Aadhaar.".to_string());
    }
    if !profile.received.contains(&DocumentTypeTag::Form16) && profile.salary_slips.is_empty() {
        queries.push(
            "Salary proof not available - request Form-16 or 3 months salary slips.".to_string(),
        );
    }
    if income::total_existing_emi(profile) > 0 {
        queries.push("Provide loan statements for existing EMIs detected.".to_string());
    }

    queries.push("Provide last 3 months bank statements with salary credits highlighted.".to_string());
    queries.push("Provide employer letter / offer letter for verification if requested.".to_string());

    queries
}

fn recommendation(eligibility: Option<&EligibilityResult>) -> String {
    match eligibility {
        Some(result) if result.approx_max_loan > 0 => format!(
            "Applicant appears eligible for an approximate loan of Rs. {}. \
Recommend further verification of KYC and bank statements.",
            format_amount(result.approx_max_loan)
        ),
        _ => "Insufficient data to compute loan eligibility. Request additional documents."
            .to_string(),
    }
}

fn format_amount(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_amounts_in_thousands() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(58_693_412), "58,693,412");
    }
}
