use super::common::*;
use crate::workflows::assessment::domain::{DocumentTypeTag, SalaryComponent};
use crate::workflows::assessment::ProfileAggregator;

#[test]
fn folding_the_same_document_twice_is_idempotent_for_identity_fields() {
    let mut once = ProfileAggregator::new();
    once.fold(&doc("pan.pdf", pan_text()));
    let once = once.finish();

    let mut twice = ProfileAggregator::new();
    twice.fold(&doc("pan.pdf", pan_text()));
    twice.fold(&doc("pan.pdf", pan_text()));
    let twice = twice.finish();

    assert_eq!(once.identity, twice.identity);
    assert_eq!(once.identity.pan.as_deref(), Some("ABCDE1234F"));
    assert_eq!(once.identity.name.as_deref(), Some("RAVI KUMAR"));
    assert_eq!(once.identity.date_of_birth.as_deref(), Some("12/04/1988"));
}

#[test]
fn identity_fields_are_first_write_wins() {
    let mut aggregator = ProfileAggregator::new();
    aggregator.fold(&doc("pan.pdf", pan_text()));
    aggregator.fold(&doc(
        "pan-duplicate.pdf",
        "PAN : FGHIJ5678K\nName: SOMEONE ELSE\n01/01/1990",
    ));
    let profile = aggregator.finish();

    assert_eq!(profile.identity.pan.as_deref(), Some("ABCDE1234F"));
    assert_eq!(profile.identity.name.as_deref(), Some("RAVI KUMAR"));
}

#[test]
fn average_balance_is_last_write_wins() {
    let later_statement = "BANK STATEMENT\nAccount Summary\nAverage Balance : Rs. 50,000";

    let mut aggregator = ProfileAggregator::new();
    aggregator.fold(&doc("feb_statement.pdf", bank_statement_text()));
    aggregator.fold(&doc("mar_statement.pdf", later_statement));
    let profile = aggregator.finish();
    assert_eq!(profile.average_balance, Some(50_000));

    // Reverse order flips the winner.
    let mut aggregator = ProfileAggregator::new();
    aggregator.fold(&doc("mar_statement.pdf", later_statement));
    aggregator.fold(&doc("feb_statement.pdf", bank_statement_text()));
    let profile = aggregator.finish();
    assert_eq!(profile.average_balance, Some(45_210));
}

#[test]
fn statement_without_balance_keeps_prior_value() {
    let mut aggregator = ProfileAggregator::new();
    aggregator.fold(&doc("feb_statement.pdf", bank_statement_text()));
    aggregator.fold(&doc(
        "mar_statement.pdf",
        "BANK STATEMENT\n02/03 CAR LOAN EMI Rs. 9,000",
    ));
    let profile = aggregator.finish();

    assert_eq!(profile.average_balance, Some(45_210));
    assert_eq!(profile.obligations.len(), 2);
}

#[test]
fn salary_slips_cap_at_three_in_encounter_order() {
    let months = ["January", "February", "March", "April", "May"];
    let mut aggregator = ProfileAggregator::new();
    for month in months {
        let filename = format!("{}-slip.pdf", month.to_lowercase());
        aggregator.fold(&doc(&filename, &salary_slip_text(month)));
    }
    let profile = aggregator.finish();

    assert_eq!(profile.salary_slips.len(), 3);
    assert_eq!(profile.salary_slips[0].source, "january-slip.pdf");
    assert_eq!(profile.salary_slips[1].source, "february-slip.pdf");
    assert_eq!(profile.salary_slips[2].source, "march-slip.pdf");
}

#[test]
fn obligations_and_credits_concatenate_across_statements() {
    let mut aggregator = ProfileAggregator::new();
    aggregator.fold(&doc("feb_statement.pdf", bank_statement_text()));
    aggregator.fold(&doc(
        "mar_statement.pdf",
        "BANK STATEMENT\n02/03 CAR LOAN EMI Rs. 9,000\n07/03 SALARY CREDIT Rs. 85,500",
    ));
    let profile = aggregator.finish();

    assert_eq!(profile.obligations.len(), 2);
    assert_eq!(profile.salary_credits, vec![85_000, 85_500]);
}

#[test]
fn multi_tag_document_is_processed_by_every_matching_extractor() {
    let combined = "Pay Slip - June 2024\nEmployer: Acme Corp\nNet Pay : Rs. 52,000";

    let mut aggregator = ProfileAggregator::new();
    aggregator.fold(&doc("june.pdf", combined));
    let profile = aggregator.finish();

    assert_eq!(profile.salary_slips.len(), 1);
    assert_eq!(
        profile.salary_slips[0].components.get(&SalaryComponent::NetPay),
        Some(&52_000)
    );
    assert_eq!(profile.identity.employer.as_deref(), Some("Acme Corp"));
    assert!(profile.received.contains(&DocumentTypeTag::SalarySlip));
    assert!(profile.received.contains(&DocumentTypeTag::Employment));
}

#[test]
fn unclassified_documents_still_feed_the_combined_text_buffer() {
    let mut aggregator = ProfileAggregator::new();
    aggregator.fold(&doc("notes.txt", "handwritten remark with no signatures"));
    let profile = aggregator.finish();

    assert!(profile.received.is_empty());
    assert_eq!(profile.document_names, vec!["notes.txt".to_string()]);
    assert!(profile.combined_text.contains("handwritten remark"));
}
