use super::{AadhaarFacts, DocumentFacts};
use once_cell::sync::Lazy;
use regex::Regex;

static AADHAAR_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4}\s?\d{4}\s?\d{4})\b").expect("valid aadhaar pattern"));

static ADDRESS_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)address[:\s\-]*").expect("valid address label pattern"));

// The address span ends at the next line that opens with two or more
// capitals (typically the city or state in caps) or at end of text.
static ADDRESS_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[A-Z]{2,}").expect("valid address terminator pattern"));

pub(crate) fn extract(text: &str) -> DocumentFacts {
    let aadhaar = AADHAAR_NUMBER_RE
        .captures(text)
        .map(|captures| captures[1].replace(' ', ""));

    DocumentFacts::Aadhaar(AadhaarFacts {
        aadhaar,
        address: address_line(text),
    })
}

fn address_line(text: &str) -> Option<String> {
    let label = ADDRESS_LABEL_RE.find(text)?;
    let tail = &text[label.end()..];
    let span = match ADDRESS_END_RE.find(tail) {
        Some(terminator) => &tail[..terminator.start()],
        None => tail,
    };

    let first_line = span.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        None
    } else {
        Some(first_line.to_string())
    }
}
