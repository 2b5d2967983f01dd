mod config;

pub use config::EligibilityConfig;

use serde::{Deserialize, Serialize};

/// FOIR affordability result for one assessment run. All monetary fields
/// are whole currency units; `available_for_new_emi` stays signed so
/// over-leveraged applicants remain visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub foir_pct: u32,
    pub gross_monthly_estimate: u64,
    pub total_existing_emi: u64,
    pub max_allowed_emi: u64,
    pub available_for_new_emi: i64,
    pub approx_max_loan: u64,
}

/// Stateless calculator applying the FOIR rule and EMI amortization to the
/// aggregated income figures.
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Compute the affordability figures. `None` gross income means the
    /// batch carried no usable income signal; the result is `None`
    /// ("insufficient data"), never a zero-valued eligibility.
    pub fn compute(
        &self,
        gross_monthly: Option<u64>,
        total_existing_emi: u64,
    ) -> Option<EligibilityResult> {
        let gross_monthly = gross_monthly?;

        let max_allowed_emi = gross_monthly * self.config.foir_pct as u64 / 100;
        let available_for_new_emi = max_allowed_emi as i64 - total_existing_emi as i64;

        // Negative headroom is preserved in the result but floored to zero
        // for the loan sizing; a loan amount cannot be negative.
        let headroom = available_for_new_emi.max(0) as f64;
        let approx_max_loan = match self.config.emi_per_unit() {
            Some(emi_per_unit) => {
                (headroom * self.config.unit_principal as f64 / emi_per_unit).floor() as u64
            }
            None => 0,
        };

        Some(EligibilityResult {
            foir_pct: self.config.foir_pct,
            gross_monthly_estimate: gross_monthly,
            total_existing_emi,
            max_allowed_emi,
            available_for_new_emi,
            approx_max_loan,
        })
    }
}
