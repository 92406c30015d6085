use serde::Serialize;

use crate::model::thresholds::{HIGH_RISK_TOTAL_MAX, MODERATE_RISK_TOTAL_MAX};

/// Greenwashing risk implied by a unit's total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    High,
    Moderate,
    Low,
}

impl RiskBand {
    pub fn from_total(total: u8) -> Self {
        if total <= HIGH_RISK_TOTAL_MAX {
            RiskBand::High
        } else if total <= MODERATE_RISK_TOTAL_MAX {
            RiskBand::Moderate
        } else {
            RiskBand::Low
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RiskBand::High => "high",
            RiskBand::Moderate => "moderate",
            RiskBand::Low => "low",
        }
    }
}

pub fn risk_order() -> &'static [RiskBand] {
    &[RiskBand::High, RiskBand::Moderate, RiskBand::Low]
}
