use super::amount::parse_amount;
use super::{DocumentFacts, Form16Facts};
use once_cell::sync::Lazy;
use regex::Regex;

static TOTAL_SALARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Total\s+Salary\s*[:\-\s]*Rs\.?\s*([0-9,]+)").expect("valid total salary pattern")
});

// Fallback for certificates that only carry a bare "Total" row. Kept
// case-sensitive: a lower-cased "total" is usually a column footer.
static TOTAL_FALLBACK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Total\s+([\d,]{5,})").expect("valid total fallback pattern"));

static TAXABLE_INCOME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Income chargeable under the head.*?([\d,]{4,})")
        .expect("valid taxable income pattern")
});

pub(crate) fn extract(text: &str) -> DocumentFacts {
    let total_salary = TOTAL_SALARY_RE
        .captures(text)
        .or_else(|| TOTAL_FALLBACK_RE.captures(text))
        .and_then(|captures| parse_amount(&captures[1]));

    let taxable_income = TAXABLE_INCOME_RE
        .captures(text)
        .and_then(|captures| parse_amount(&captures[1]));

    DocumentFacts::Form16(Form16Facts {
        total_salary,
        taxable_income,
    })
}
