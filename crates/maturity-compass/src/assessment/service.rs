use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{DimensionView, QuestionnaireCatalog};
use super::domain::{Assessment, AssessmentId, Project, ProjectId};
use super::ingest::{self, AnswerPayload, IngestError};
use super::recommendation::{Locale, RecommendationEngine};
use super::repository::{
    AssessmentRecord, AssessmentRepository, ProjectRepository, ReportView, RepositoryError,
};
use super::scoring::ScoreCalculator;

/// Service composing the questionnaire catalog, repositories, score
/// calculator, and recommendation engine.
///
/// The service is the only writer of assessment scores: they are computed
/// once, synchronously with answer ingestion, and read back verbatim for
/// reports.
pub struct AssessmentService<P, R> {
    projects: Arc<P>,
    assessments: Arc<R>,
    catalog: Arc<QuestionnaireCatalog>,
    calculator: ScoreCalculator,
    recommendations: RecommendationEngine,
}

static PROJECT_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_project_id() -> ProjectId {
    let id = PROJECT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProjectId(format!("prj-{id:06}"))
}

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asm-{id:06}"))
}

/// Request payload for registering a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Request payload for submitting one assessment's answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub project: ProjectId,
    pub answers: Vec<AnswerPayload>,
}

impl<P, R> AssessmentService<P, R>
where
    P: ProjectRepository + 'static,
    R: AssessmentRepository + 'static,
{
    pub fn new(
        projects: Arc<P>,
        assessments: Arc<R>,
        catalog: Arc<QuestionnaireCatalog>,
        locale: Locale,
    ) -> Self {
        Self {
            projects,
            assessments,
            catalog,
            calculator: ScoreCalculator::default(),
            recommendations: RecommendationEngine::new(locale),
        }
    }

    /// Published questionnaire for answer collection.
    pub fn questionnaire(&self) -> Vec<DimensionView> {
        self.catalog.questionnaire_view()
    }

    /// Register a project so assessments can reference it.
    pub fn create_project(
        &self,
        request: NewProject,
    ) -> Result<Project, AssessmentServiceError> {
        let project = Project {
            id: next_project_id(),
            name: request.name,
            description: request.description,
            created_at: Utc::now(),
        };
        let stored = self.projects.insert(project)?;
        Ok(stored)
    }

    /// Ingest one assessment submission: validate the answers, compute the
    /// scores exactly once, and persist the record.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let project = self
            .projects
            .fetch(&submission.project)?
            .ok_or(RepositoryError::NotFound)?;

        let answers = ingest::resolve_answers(submission.answers, &self.catalog)?;
        let weighted = ingest::weighted_answers(&answers, &self.catalog);
        let scores = self.calculator.compute(&weighted);

        let assessment = Assessment {
            id: next_assessment_id(),
            project: project.id.clone(),
            created_at: Utc::now(),
            compliance_score: scores.compliance,
            maturity_score: scores.maturity,
        };

        let record = AssessmentRecord {
            assessment,
            answers,
        };
        let stored = self.assessments.insert(record)?;

        info!(
            assessment = %stored.assessment.id.0,
            project = %project.id.0,
            compliance = stored.assessment.compliance_score,
            maturity = stored.assessment.maturity_score,
            "assessment scored"
        );

        Ok(stored)
    }

    /// Fetch a stored assessment record.
    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .assessments
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Build the report payload from the persisted scores. The engine only
    /// needs the two floats; answers are not re-read here.
    pub fn report(&self, id: &AssessmentId) -> Result<ReportView, AssessmentServiceError> {
        let record = self.get(id)?;
        let project = self
            .projects
            .fetch(&record.assessment.project)?
            .ok_or(RepositoryError::NotFound)?;

        let scores = record.scores();
        let recommendations = self
            .recommendations
            .build(scores.compliance, scores.maturity);

        Ok(ReportView {
            assessment_id: record.assessment.id,
            project: project.name,
            scores,
            recommendations,
        })
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
