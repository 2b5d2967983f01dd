use super::amount::{first_rupee_amount, parse_amount};
use super::{BankStatementFacts, DocumentFacts};
use crate::workflows::assessment::domain::ObligationRecord;
use once_cell::sync::Lazy;
use regex::Regex;

static OBLIGATION_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:EMI|EMI Debit|instalment|installment|loan)\b")
        .expect("valid obligation line pattern")
});

static SALARY_CREDIT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bSalary\b|\bCredit Salary\b|\bSALARY CREDIT\b")
        .expect("valid salary credit pattern")
});

static AVERAGE_BALANCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Average\s+Balance\s*[:\-]?\s*Rs\.?\s*([0-9,]+)")
        .expect("valid average balance pattern")
});

pub(crate) fn extract(text: &str) -> DocumentFacts {
    let mut obligations = Vec::new();
    let mut salary_credits = Vec::new();

    for line in text.lines() {
        if OBLIGATION_LINE_RE.is_match(line) {
            // Lines with no parsable amount are kept with a null amount so
            // they still surface for manual review.
            obligations.push(ObligationRecord {
                description: line.trim().to_string(),
                monthly_amount: first_rupee_amount(line),
            });
        }

        if SALARY_CREDIT_LINE_RE.is_match(line) {
            if let Some(amount) = first_rupee_amount(line) {
                salary_credits.push(amount);
            }
        }
    }

    let average_balance = AVERAGE_BALANCE_RE
        .captures(text)
        .and_then(|captures| parse_amount(&captures[1]));

    DocumentFacts::BankStatement(BankStatementFacts {
        obligations,
        salary_credits,
        average_balance,
    })
}
