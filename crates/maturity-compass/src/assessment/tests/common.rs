use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::QuestionnaireCatalog;
use crate::assessment::domain::{
    AssessmentId, Dimension, DimensionCode, Framework, Project, ProjectId, Question, QuestionId,
};
use crate::assessment::ingest::{AnswerPayload, AnswerRecord};
use crate::assessment::recommendation::Locale;
use crate::assessment::repository::{
    AssessmentRecord, AssessmentRepository, ProjectRepository, RepositoryError,
};
use crate::assessment::service::{AssessmentService, AssessmentSubmission, NewProject};

#[derive(Default)]
pub(super) struct MemoryProjects {
    records: Mutex<HashMap<ProjectId, Project>>,
}

impl ProjectRepository for MemoryProjects {
    fn insert(&self, project: Project) -> Result<Project, RepositoryError> {
        let mut guard = self.records.lock().expect("project mutex poisoned");
        if guard.contains_key(&project.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(project.id.clone(), project.clone());
        Ok(project)
    }

    fn fetch(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError> {
        let guard = self.records.lock().expect("project mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default)]
pub(super) struct MemoryAssessments {
    records: Mutex<HashMap<AssessmentId, AssessmentRecord>>,
}

impl AssessmentRepository for MemoryAssessments {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("assessment mutex poisoned");
        if guard.contains_key(&record.assessment.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("assessment mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Repository stub that refuses every call, for failure-path routing tests.
pub(super) struct UnavailableAssessments;

impl AssessmentRepository for UnavailableAssessments {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }
}

pub(super) type StandardService = AssessmentService<MemoryProjects, MemoryAssessments>;

pub(super) fn build_service() -> Arc<StandardService> {
    Arc::new(AssessmentService::new(
        Arc::new(MemoryProjects::default()),
        Arc::new(MemoryAssessments::default()),
        Arc::new(QuestionnaireCatalog::standard()),
        Locale::PtBr,
    ))
}

/// Catalog with uneven weights so the weighted-average law is observable.
pub(super) fn weighted_catalog() -> QuestionnaireCatalog {
    let code = DimensionCode("TEST_DIM".to_string());
    let dimensions = vec![Dimension {
        code: code.clone(),
        title: "Test Dimension".to_string(),
        framework: Framework::Pmbok,
    }];
    let questions = vec![
        Question {
            id: QuestionId("TEST_DIM-01".to_string()),
            dimension: code.clone(),
            text: "Question 1?".to_string(),
            weight: 2.0,
            order: 1,
            is_active: true,
        },
        Question {
            id: QuestionId("TEST_DIM-02".to_string()),
            dimension: code,
            text: "Question 2?".to_string(),
            weight: 1.0,
            order: 2,
            is_active: true,
        },
    ];
    QuestionnaireCatalog::new(dimensions, questions)
}

pub(super) fn new_project(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: "created for tests".to_string(),
    }
}

pub(super) fn record(question: &str, value: i32) -> AnswerPayload {
    AnswerPayload::Record(AnswerRecord {
        question: QuestionId(question.to_string()),
        value,
    })
}

pub(super) fn submission(project: ProjectId, answers: Vec<AnswerPayload>) -> AssessmentSubmission {
    AssessmentSubmission { project, answers }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
