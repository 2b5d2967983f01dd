use super::{DocumentFacts, PropertyFacts};

// Property papers are retained as a free-text blob for the report; no
// structured parsing is attempted on deeds or valuations.
pub(crate) fn extract(text: &str) -> DocumentFacts {
    DocumentFacts::Property(PropertyFacts {
        notes: text.to_string(),
    })
}
