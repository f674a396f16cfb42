mod maturity;

pub use maturity::{ComplianceMirror, MaturityModel};

use super::domain::{Scores, WeightedAnswer};

/// Stateless calculator turning an answer snapshot into normalized scores.
///
/// The computation is total: out-of-range values are clamped, degenerate
/// weights are defaulted, and an empty snapshot yields zero scores. Nothing
/// here errors or panics for finite numeric input.
pub struct ScoreCalculator {
    maturity: Box<dyn MaturityModel>,
}

impl ScoreCalculator {
    pub fn new(maturity: Box<dyn MaturityModel>) -> Self {
        Self { maturity }
    }

    /// Compute compliance and maturity for one assessment.
    ///
    /// Answers are expected in [0..5] and clamped to that range before use.
    /// Compliance is the weighted average normalized to 0..100; maturity is
    /// delegated to the configured [`MaturityModel`]. Both are rounded to two
    /// decimals with half-to-even (banker's) rounding.
    pub fn compute(&self, answers: &[WeightedAnswer]) -> Scores {
        if answers.is_empty() {
            return Scores::zero();
        }

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for answer in answers {
            let weight = super::domain::resolve_weight(Some(answer.weight));
            weighted_sum += answer.value.clamp(0.0, 5.0) * weight;
            total_weight += weight;
        }

        // Unreachable once weights are resolved, but kept so a raw
        // all-zero-weight snapshot still divides safely.
        if total_weight == 0.0 {
            total_weight = 1.0;
        }

        let average = weighted_sum / total_weight;
        let compliance = round2((average / 5.0) * 100.0);
        let maturity = round2(self.maturity.derive(compliance));

        Scores {
            compliance,
            maturity,
        }
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new(Box::new(ComplianceMirror))
    }
}

/// Two-decimal rounding, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
