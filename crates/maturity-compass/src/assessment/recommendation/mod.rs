mod messages;

pub use messages::Locale;

use serde::{Deserialize, Serialize};

/// Compliance below this falls into the low bracket (strict `<`).
pub const LOW_COMPLIANCE_CEILING: f64 = 40.0;
/// Compliance below this (and at or above the low ceiling) is the medium bracket.
pub const MEDIUM_COMPLIANCE_CEILING: f64 = 70.0;
/// Maturity below this appends the incremental-delivery addendum.
pub const LOW_MATURITY_CEILING: f64 = 50.0;

/// Advisory template selected by the threshold rules. Selection is separate
/// from wording so new locales only touch the message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    FormalizePlanning,
    MinimumComplianceControls,
    RefineChangeManagement,
    StrengthenGovernance,
    ConsolidateLessonsLearned,
    IncrementalDelivery,
}

/// Apply the threshold cascade to a score pair.
///
/// The compliance brackets are mutually exclusive; the maturity check is
/// independent and its addendum is always last. Thresholds are strict, so a
/// score sitting exactly on a boundary lands in the next-higher bracket.
/// Total over all real inputs and order-significant.
pub fn select_recommendations(compliance: f64, maturity: f64) -> Vec<RecommendationKind> {
    let mut kinds = Vec::new();

    if compliance < LOW_COMPLIANCE_CEILING {
        kinds.push(RecommendationKind::FormalizePlanning);
        kinds.push(RecommendationKind::MinimumComplianceControls);
    } else if compliance < MEDIUM_COMPLIANCE_CEILING {
        kinds.push(RecommendationKind::RefineChangeManagement);
        kinds.push(RecommendationKind::StrengthenGovernance);
    } else {
        kinds.push(RecommendationKind::ConsolidateLessonsLearned);
    }

    if maturity < LOW_MATURITY_CEILING {
        kinds.push(RecommendationKind::IncrementalDelivery);
    }

    kinds
}

/// Renders selected recommendation kinds in a configured locale.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine {
    locale: Locale,
}

impl RecommendationEngine {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Ordered, human-readable recommendations for a persisted score pair.
    pub fn build(&self, compliance: f64, maturity: f64) -> Vec<String> {
        select_recommendations(compliance, maturity)
            .into_iter()
            .map(|kind| kind.message(self.locale).to_string())
            .collect()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(Locale::PtBr)
    }
}
