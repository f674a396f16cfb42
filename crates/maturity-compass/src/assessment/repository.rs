use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Answer, Assessment, AssessmentId, Project, ProjectId, Scores};

/// Repository record pairing an assessment with its immutable answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment: Assessment,
    pub answers: Vec<Answer>,
}

impl AssessmentRecord {
    pub fn scores(&self) -> Scores {
        Scores {
            compliance: self.assessment.compliance_score,
            maturity: self.assessment.maturity_score,
        }
    }

    pub fn status_view(&self) -> AssessmentStatusView {
        AssessmentStatusView {
            assessment_id: self.assessment.id.clone(),
            project: self.assessment.project.clone(),
            created_at: self.assessment.created_at,
            answered: self.answers.len(),
            scores: self.scores(),
        }
    }
}

/// Storage abstraction for projects so the service module can be exercised in
/// isolation.
pub trait ProjectRepository: Send + Sync {
    fn insert(&self, project: Project) -> Result<Project, RepositoryError>;
    fn fetch(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError>;
}

/// Storage abstraction for assessments and their answers. Records are
/// write-once: the service inserts a fully scored record and only ever reads
/// it back, so the trait deliberately offers no mutation path.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a stored assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentStatusView {
    pub assessment_id: AssessmentId,
    pub project: ProjectId,
    pub created_at: DateTime<Utc>,
    pub answered: usize,
    pub scores: Scores,
}

/// Report payload for downstream consumers: persisted scores plus the
/// recommendations derived from them.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub assessment_id: AssessmentId,
    pub project: String,
    pub scores: Scores,
    pub recommendations: Vec<String>,
}
