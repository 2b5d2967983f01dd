use tracing::debug;

use super::classify::{classify, filename_hints};
use super::domain::{ApplicantProfile, DocumentText, DocumentTypeTag, SalaryBreakdown};
use super::extract::{extractor_for, DocumentFacts};

const SALARY_SLIP_CAP: usize = 3;

/// Folds per-document facts into a single applicant record.
///
/// Precedence rules: scalar identity fields are first-write-wins; the
/// average bank balance is last-write-wins (a later statement is assumed
/// more current); salary slips accumulate in encounter order up to the cap;
/// obligations and salary credits concatenate without a cap.
#[derive(Debug, Default)]
pub struct ProfileAggregator {
    profile: ApplicantProfile,
}

impl ProfileAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document. Documents matching no signature still contribute
    /// their text to the combined buffer used by fallback heuristics.
    pub fn fold(&mut self, document: &DocumentText) {
        let mut tags = classify(&document.text);
        tags.extend(filename_hints(&document.filename));

        debug!(filename = %document.filename, ?tags, "classified document");

        self.profile.document_names.push(document.filename.clone());
        self.profile.combined_text.push_str("\n\n");
        self.profile.combined_text.push_str(&document.text);

        for tag in tags {
            let facts = (extractor_for(tag))(&document.text);
            self.apply(&document.filename, facts);
        }
    }

    pub fn finish(self) -> ApplicantProfile {
        self.profile
    }

    fn apply(&mut self, source: &str, facts: DocumentFacts) {
        match facts {
            DocumentFacts::Pan(pan) => {
                let material =
                    pan.pan.is_some() || pan.name.is_some() || pan.date_of_birth.is_some();
                set_if_empty(&mut self.profile.identity.pan, pan.pan);
                set_if_empty(&mut self.profile.identity.name, pan.name);
                set_if_empty(&mut self.profile.identity.date_of_birth, pan.date_of_birth);
                if material {
                    self.profile.received.insert(DocumentTypeTag::Pan);
                }
            }
            DocumentFacts::Aadhaar(aadhaar) => {
                let material = aadhaar.aadhaar.is_some() || aadhaar.address.is_some();
                set_if_empty(&mut self.profile.identity.aadhaar, aadhaar.aadhaar);
                set_if_empty(&mut self.profile.identity.address, aadhaar.address);
                if material {
                    self.profile.received.insert(DocumentTypeTag::Aadhaar);
                }
            }
            DocumentFacts::SalarySlip(slip) => {
                if !slip.components.is_empty() {
                    self.profile.received.insert(DocumentTypeTag::SalarySlip);
                }
                if self.profile.salary_slips.len() < SALARY_SLIP_CAP {
                    self.profile.salary_slips.push(SalaryBreakdown {
                        source: source.to_string(),
                        components: slip.components,
                    });
                } else {
                    debug!(filename = %source, "salary slip cap reached, discarding breakdown");
                }
            }
            DocumentFacts::BankStatement(statement) => {
                self.profile.obligations.extend(statement.obligations);
                self.profile.salary_credits.extend(statement.salary_credits);
                if statement.average_balance.is_some() {
                    // Last-write-wins: the most recent statement that reports
                    // a balance is assumed more current.
                    self.profile.average_balance = statement.average_balance;
                }
                self.profile.received.insert(DocumentTypeTag::BankStatement);
            }
            DocumentFacts::Cibil(cibil) => {
                if self.profile.cibil_score.is_none() {
                    self.profile.cibil_score = cibil.score;
                }
                self.profile.loan_history.extend(cibil.loan_history);
                self.profile.received.insert(DocumentTypeTag::Cibil);
            }
            DocumentFacts::Form16(form16) => {
                let summary = self.profile.form16.get_or_insert_with(Default::default);
                if summary.total_salary.is_none() {
                    summary.total_salary = form16.total_salary;
                }
                if summary.taxable_income.is_none() {
                    summary.taxable_income = form16.taxable_income;
                }
                if summary.total_salary.is_some() || summary.taxable_income.is_some() {
                    self.profile.received.insert(DocumentTypeTag::Form16);
                }
            }
            DocumentFacts::Employment(employment) => {
                set_if_empty(&mut self.profile.identity.employer, employment.employer);
                if !employment.notes.is_empty() {
                    set_if_empty(
                        &mut self.profile.employment_notes,
                        Some(employment.notes),
                    );
                    self.profile.received.insert(DocumentTypeTag::Employment);
                }
            }
            DocumentFacts::Property(property) => {
                if !property.notes.is_empty() {
                    set_if_empty(&mut self.profile.property_notes, Some(property.notes));
                    self.profile.received.insert(DocumentTypeTag::Property);
                }
            }
        }
    }
}

fn set_if_empty(slot: &mut Option<String>, value: Option<String>) {
    if slot.is_none() {
        if let Some(value) = value {
            *slot = Some(value);
        }
    }
}
