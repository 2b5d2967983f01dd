use chrono::NaiveDate;
use loan_assess::config::AppConfig;
use loan_assess::workflows::assessment::EligibilityConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the engine configuration from the environment-backed defaults.
/// The unit principal is the conventional one-lakh slab lenders quote
/// per-unit EMIs against; it is not exposed as a dial.
pub(crate) fn eligibility_config_from(config: &AppConfig) -> EligibilityConfig {
    EligibilityConfig {
        foir_pct: config.assessment.foir_pct,
        annual_rate_pct: config.assessment.annual_rate_pct,
        tenure_years: config.assessment.tenure_years,
        ..EligibilityConfig::default()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
