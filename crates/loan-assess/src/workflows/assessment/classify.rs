use super::domain::DocumentTypeTag;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

// Signatures are matched against the lower-cased document text and
// OR-combined per tag. Tags are not mutually exclusive; overlap is handled
// downstream by running every matching extractor.
static SIGNATURES: Lazy<Vec<(DocumentTypeTag, Regex)>> = Lazy::new(|| {
    const TAG_PATTERNS: &[(DocumentTypeTag, &str)] = &[
        (
            DocumentTypeTag::Pan,
            r"\bpan\b|income tax permanent account number|incometaxindiaefiling",
        ),
        (
            DocumentTypeTag::Aadhaar,
            r"\baadhaar\b|\baadhar\b|\buidai\b|\bunique identification|\b\d{4}\s\d{4}\s\d{4}\b",
        ),
        (
            DocumentTypeTag::SalarySlip,
            r"salary|salary slip|pay slip|net pay|gross salary|basic",
        ),
        (
            DocumentTypeTag::BankStatement,
            r"bank statement|account summary|debit|credit|available balance",
        ),
        (
            DocumentTypeTag::Form16,
            r"form-16|form 16|income tax|tds deducted",
        ),
        (
            DocumentTypeTag::Cibil,
            r"cibil|credit information|credit bureau|transunion|equifax|credit score",
        ),
        (
            DocumentTypeTag::Employment,
            r"offer letter|appointment letter|employment|employer",
        ),
        (
            DocumentTypeTag::Property,
            r"agreement|sale deed|property|valuation|registry",
        ),
    ];

    TAG_PATTERNS
        .iter()
        .map(|(tag, pattern)| (*tag, Regex::new(pattern).expect("valid signature pattern")))
        .collect()
});

/// Label a text blob with every matching document category. Absence of a
/// match is a normal empty result, never an error.
pub fn classify(text: &str) -> BTreeSet<DocumentTypeTag> {
    let lowered = text.to_lowercase();
    SIGNATURES
        .iter()
        .filter(|(_, signature)| signature.is_match(&lowered))
        .map(|(tag, _)| *tag)
        .collect()
}

/// The original upload flow also routed extractors off the declared file
/// name. Preserved as its own rule so the imprecision stays visible and
/// testable: a file called `march-salary.pdf` is treated as a salary slip
/// even when OCR mangled the slip heading.
pub fn filename_hints(filename: &str) -> BTreeSet<DocumentTypeTag> {
    let lowered = filename.to_lowercase();
    let mut hints = BTreeSet::new();

    if lowered.contains("form-16") || lowered.contains("form16") {
        hints.insert(DocumentTypeTag::Form16);
    }
    if lowered.contains("salary") {
        hints.insert(DocumentTypeTag::SalarySlip);
    }
    if lowered.contains("statement") {
        hints.insert(DocumentTypeTag::BankStatement);
    }
    if lowered.contains("cibil") {
        hints.insert(DocumentTypeTag::Cibil);
    }
    if lowered.contains("offer") || lowered.contains("appointment") {
        hints.insert(DocumentTypeTag::Employment);
    }

    hints
}
