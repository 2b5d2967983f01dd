/// Strip the artifacts OCR engines tend to leave behind (byte-order marks,
/// zero-width spaces, carriage returns) without touching line structure,
/// which the bank-statement and CIBIL extractors depend on.
pub(crate) fn scrub_text(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}', '\r'], "")
}
