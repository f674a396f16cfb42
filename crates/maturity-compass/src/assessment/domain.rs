use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for registered projects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

/// Identifier wrapper for submitted assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short code identifying a questionnaire dimension (e.g. `PM_PLAN`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionCode(pub String);

/// Governance framework a dimension is aligned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Framework {
    Pmbok,
    Hcmbok,
    Prince,
    Compliance,
}

impl Framework {
    pub fn label(&self) -> &'static str {
        match self {
            Framework::Pmbok => "PMBOK",
            Framework::Hcmbok => "HCMBOK",
            Framework::Prince => "PRINCE",
            Framework::Compliance => "COMPLIANCE",
        }
    }
}

/// Named grouping of questions tied to a governance framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub code: DimensionCode,
    pub title: String,
    pub framework: Framework,
}

/// Questionnaire item with a relative importance used during aggregation.
///
/// Inactive questions are excluded from the published questionnaire; the
/// scoring engine itself trusts whatever answer set it is handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub dimension: DimensionCode,
    pub text: String,
    pub weight: f64,
    pub order: u32,
    pub is_active: bool,
}

/// Project under assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// One evaluation round for a project.
///
/// `compliance_score` and `maturity_score` start at 0.0 and are written
/// exactly once, from the calculator output, when the answers are ingested.
/// Recomputing from the same answers always yields the same scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: AssessmentId,
    pub project: ProjectId,
    pub created_at: DateTime<Utc>,
    pub compliance_score: f64,
    pub maturity_score: f64,
}

/// Recorded response to one question. Immutable once stored; at most one per
/// (assessment, question) pair, enforced during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question: QuestionId,
    pub value: i32,
}

/// Normalized (value, weight) pair — the calculator's sole input shape.
///
/// The weight default is resolved here, explicitly: a missing or non-positive
/// weight becomes 1.0 before the engine ever sees the pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedAnswer {
    pub value: f64,
    pub weight: f64,
}

impl WeightedAnswer {
    pub fn new(value: f64, weight: Option<f64>) -> Self {
        Self {
            value,
            weight: resolve_weight(weight),
        }
    }
}

/// Missing or non-positive weights carry no meaning; fall back to 1.0.
pub(crate) fn resolve_weight(weight: Option<f64>) -> f64 {
    match weight {
        Some(weight) if weight.is_finite() && weight > 0.0 => weight,
        _ => 1.0,
    }
}

/// Normalized score pair in [0, 100], rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub compliance: f64,
    pub maturity: f64,
}

impl Scores {
    /// Scores are defined as zero (not an error) when no answers exist.
    pub fn zero() -> Self {
        Self {
            compliance: 0.0,
            maturity: 0.0,
        }
    }
}
