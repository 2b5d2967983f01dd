use super::{DocumentFacts, EmploymentFacts};
use once_cell::sync::Lazy;
use regex::Regex;

static EMPLOYER_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Employer\s*[:\-]?\s*(.+)").expect("valid employer pattern"));

pub(crate) fn extract(text: &str) -> DocumentFacts {
    let employer = EMPLOYER_LINE_RE
        .captures(text)
        .map(|captures| captures[1].trim().to_string())
        .filter(|value| !value.is_empty());

    DocumentFacts::Employment(EmploymentFacts {
        employer,
        notes: text.to_string(),
    })
}
