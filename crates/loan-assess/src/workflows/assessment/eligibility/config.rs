use serde::{Deserialize, Serialize};

/// Affordability rule configuration for one computation run. Passed in
/// explicitly by the caller; the core holds no configuration of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Fixed Obligation-to-Income Ratio ceiling, as a whole percentage.
    pub foir_pct: u32,
    pub annual_rate_pct: f64,
    pub tenure_years: u32,
    /// Principal slab the per-unit EMI is quoted against (one lakh).
    pub unit_principal: u64,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            foir_pct: 60,
            annual_rate_pct: 8.5,
            tenure_years: 20,
            unit_principal: 100_000,
        }
    }
}

impl EligibilityConfig {
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / 12.0
    }

    pub fn installments(&self) -> u32 {
        self.tenure_years * 12
    }

    /// Reducing-balance EMI on `unit_principal`:
    /// `P * r * (1+r)^n / ((1+r)^n - 1)`.
    ///
    /// Returns `None` for a non-positive rate or any configuration that
    /// produces a non-finite figure; callers must report a zero loan
    /// amount in that case rather than dividing by it.
    pub fn emi_per_unit(&self) -> Option<f64> {
        let rate = self.monthly_rate();
        if rate <= 0.0 {
            return None;
        }

        let factor = (1.0 + rate).powi(self.installments() as i32);
        let emi = self.unit_principal as f64 * rate * factor / (factor - 1.0);
        (emi.is_finite() && emi > 0.0).then_some(emi)
    }
}
