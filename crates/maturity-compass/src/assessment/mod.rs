//! Assessment questionnaire, scoring, and recommendation workflow.
//!
//! `scoring` and `recommendation` are the pure computation core; `catalog`,
//! `ingest`, `repository`, `service`, and `router` are the collaborators that
//! feed answers in and carry scores out.

pub mod catalog;
pub mod domain;
pub mod ingest;
pub mod recommendation;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{DimensionView, QuestionView, QuestionnaireCatalog};
pub use domain::{
    Answer, Assessment, AssessmentId, Dimension, DimensionCode, Framework, Project, ProjectId,
    Question, QuestionId, Scores, WeightedAnswer,
};
pub use ingest::{AnswerPayload, AnswerRecord, IngestError};
pub use recommendation::{Locale, RecommendationEngine, RecommendationKind};
pub use repository::{
    AssessmentRecord, AssessmentRepository, AssessmentStatusView, ProjectRepository, ReportView,
    RepositoryError,
};
pub use router::assessment_router;
pub use scoring::{ComplianceMirror, MaturityModel, ScoreCalculator};
pub use service::{
    AssessmentService, AssessmentServiceError, AssessmentSubmission, NewProject,
};
