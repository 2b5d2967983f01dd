use super::{CibilFacts, DocumentFacts};
use once_cell::sync::Lazy;
use regex::Regex;

static SCORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:CIBIL|Credit Score)\s*[:\-]?\s*([0-9]{3})").expect("valid score pattern")
});

static LOAN_HISTORY_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:loan|outstanding|emi)\b").expect("valid loan history pattern")
});

pub(crate) fn extract(text: &str) -> DocumentFacts {
    let score = SCORE_RE
        .captures(text)
        .and_then(|captures| captures[1].parse().ok());

    // Loan-history lines are retained verbatim; no further parsing.
    let loan_history = text
        .lines()
        .filter(|line| LOAN_HISTORY_LINE_RE.is_match(line))
        .map(|line| line.trim().to_string())
        .collect();

    DocumentFacts::Cibil(CibilFacts {
        score,
        loan_history,
    })
}
