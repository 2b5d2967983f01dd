use super::{DocumentFacts, PanFacts};
use once_cell::sync::Lazy;
use regex::Regex;

static PAN_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]{5}[0-9]{4}[A-Z]").expect("valid PAN pattern"));

// First-match-wins candidate name: a "Name:"-prefixed line. Known to pick
// up whatever caption OCR put on that line; kept deliberately crude.
static NAME_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Name\s*[:\-]?\s*([A-Z][A-Z \.]{3,100})").expect("valid name pattern"));

static DOB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2}/\d{2}/\d{4}").expect("valid dob pattern"));

pub(crate) fn extract(text: &str) -> DocumentFacts {
    let pan = PAN_NUMBER_RE
        .find(text)
        .map(|found| found.as_str().to_string());

    let name = NAME_LINE_RE
        .captures(text)
        .map(|captures| captures[1].trim().to_string());

    let date_of_birth = DOB_RE.find(text).map(|found| found.as_str().to_string());

    DocumentFacts::Pan(PanFacts {
        pan,
        name,
        date_of_birth,
    })
}
