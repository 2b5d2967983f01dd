use super::amount::parse_amount;
use super::{DocumentFacts, SalarySlipFacts};
use crate::workflows::assessment::domain::SalaryComponent;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static COMPONENT_PATTERNS: Lazy<Vec<(SalaryComponent, Regex)>> = Lazy::new(|| {
    const PATTERNS: &[(SalaryComponent, &str)] = &[
        (
            SalaryComponent::Basic,
            r"(?i)Basic\s*[:\-]?\s*Rs\.?\s*([0-9,]+)",
        ),
        (
            SalaryComponent::Hra,
            r"(?i)HRA\s*[:\-]?\s*Rs\.?\s*([0-9,]+)",
        ),
        (
            SalaryComponent::SpecialAllowance,
            r"(?i)(?:Special Allowance|Spl\.? Allowance)\s*[:\-]?\s*Rs\.?\s*([0-9,]+)",
        ),
        (
            SalaryComponent::Gross,
            r"(?i)Gross(?: Salary)?\s*[:\-]?\s*Rs\.?\s*([0-9,]+)",
        ),
        (
            SalaryComponent::NetPay,
            r"(?i)Net(?: Pay| Salary)\s*[:\-]?\s*Rs\.?\s*([0-9,]+)",
        ),
        (
            SalaryComponent::Pf,
            r"(?i)(?:Provident Fund|PF)\s*[:\-]?\s*Rs\.?\s*([0-9,]+)",
        ),
    ];

    PATTERNS
        .iter()
        .map(|(component, pattern)| {
            (
                *component,
                Regex::new(pattern).expect("valid salary component pattern"),
            )
        })
        .collect()
});

pub(crate) fn extract(text: &str) -> DocumentFacts {
    let mut components = BTreeMap::new();

    for (component, pattern) in COMPONENT_PATTERNS.iter() {
        if let Some(amount) = pattern
            .captures(text)
            .and_then(|captures| parse_amount(&captures[1]))
        {
            components.insert(*component, amount);
        }
    }

    if !components.contains_key(&SalaryComponent::NetPay) {
        if let Some(amount) = fallback_net_pay(text) {
            components.insert(SalaryComponent::NetPay, amount);
        }
    }

    DocumentFacts::SalarySlip(SalarySlipFacts { components })
}

static FALLBACK_NET_PAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Rs\.?\s*([0-9,]{3,})").expect("valid fallback pattern"));

/// Fallback Net Pay rule: when no explicit label matched, the last
/// rupee-prefixed number in the slip (usually the bottom summary row) is
/// taken as Net Pay. A known-crude heuristic, preserved on purpose; it will
/// happily pick a deduction total on unusual layouts.
fn fallback_net_pay(text: &str) -> Option<u64> {
    FALLBACK_NET_PAY_RE
        .captures_iter(text)
        .last()
        .and_then(|captures| parse_amount(&captures[1]))
}
