use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::domain::{ApplicantProfile, DocumentText};
use super::eligibility::{EligibilityConfig, EligibilityEngine, EligibilityResult};
use super::income;
use super::profile::ProfileAggregator;
use super::report;
use super::report::views::AssessmentReport;

/// Everything one assessment run produces, handed to the rendering
/// collaborator as-is.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentOutcome {
    pub profile: ApplicantProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<EligibilityResult>,
    pub report: AssessmentReport,
}

/// Service composing the classifier, extractors, aggregator, eligibility
/// engine, and report deriver over one caller-supplied document batch.
///
/// Processing is synchronous and strictly in the caller's order; the
/// first-write-wins and last-write-wins precedence rules depend on it.
pub struct AssessmentService {
    engine: EligibilityEngine,
}

impl AssessmentService {
    pub fn new(config: EligibilityConfig) -> Self {
        Self {
            engine: EligibilityEngine::new(config),
        }
    }

    pub fn config(&self) -> &EligibilityConfig {
        self.engine.config()
    }

    pub fn assess(&self, documents: &[DocumentText], assessed_on: NaiveDate) -> AssessmentOutcome {
        let mut aggregator = ProfileAggregator::new();
        for document in documents {
            aggregator.fold(document);
        }
        let profile = aggregator.finish();

        let total_existing_emi = income::total_existing_emi(&profile);
        let gross_monthly = income::gross_monthly_estimate(&profile);
        let eligibility = self.engine.compute(gross_monthly, total_existing_emi);

        let eligible = matches!(&eligibility, Some(result) if result.approx_max_loan > 0);
        info!(
            documents = documents.len(),
            total_existing_emi,
            gross_monthly = ?gross_monthly,
            eligible,
            "assessment complete"
        );

        let report = report::build_report(&profile, eligibility.as_ref(), assessed_on);

        AssessmentOutcome {
            profile,
            eligibility,
            report,
        }
    }
}
