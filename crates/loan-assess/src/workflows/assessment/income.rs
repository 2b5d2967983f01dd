use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::{ApplicantProfile, SalaryComponent};
use super::extract::amount::parse_amount;

// Last-resort probe over the combined text of every uploaded document,
// classified or not.
static TOTAL_INCOME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Total\s+Income\s*[:\-]?\s*Rs\.?\s*([0-9,]+)")
        .expect("valid total income pattern")
});

/// Sum of all obligation amounts that parsed. Null-amount obligations
/// contribute nothing here but stay listed on the profile for review.
pub fn total_existing_emi(profile: &ApplicantProfile) -> u64 {
    profile
        .obligations
        .iter()
        .filter_map(|obligation| obligation.monthly_amount)
        .sum()
}

/// Derive the gross monthly income estimate, trying in order: Form-16
/// total annual salary over twelve, the first retained salary slip's Net
/// Pay, then a "Total Income"-labeled amount in the combined text over
/// twelve. `None` when nothing succeeds; the eligibility calculator must
/// treat that as insufficient data, never as zero.
pub fn gross_monthly_estimate(profile: &ApplicantProfile) -> Option<u64> {
    if let Some(form16) = &profile.form16 {
        if let Some(total_salary) = form16.total_salary {
            return Some(total_salary / 12);
        }
    }

    if let Some(first_slip) = profile.salary_slips.first() {
        if let Some(net_pay) = first_slip.components.get(&SalaryComponent::NetPay) {
            return Some(*net_pay);
        }
    }

    TOTAL_INCOME_RE
        .captures(&profile.combined_text)
        .and_then(|captures| parse_amount(&captures[1]))
        .map(|annual| annual / 12)
}
