use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::AssessmentId;
use super::repository::{AssessmentRepository, ProjectRepository, RepositoryError};
use super::service::{
    AssessmentService, AssessmentServiceError, AssessmentSubmission, NewProject,
};

/// Router builder exposing the questionnaire, project intake, assessment
/// submission, and report endpoints.
pub fn assessment_router<P, R>(service: Arc<AssessmentService<P, R>>) -> Router
where
    P: ProjectRepository + 'static,
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/questionnaire", get(questionnaire_handler::<P, R>))
        .route("/api/v1/projects", post(create_project_handler::<P, R>))
        .route("/api/v1/assessments", post(submit_handler::<P, R>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(status_handler::<P, R>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/report",
            get(report_handler::<P, R>),
        )
        .with_state(service)
}

pub(crate) async fn questionnaire_handler<P, R>(
    State(service): State<Arc<AssessmentService<P, R>>>,
) -> Response
where
    P: ProjectRepository + 'static,
    R: AssessmentRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.questionnaire())).into_response()
}

pub(crate) async fn create_project_handler<P, R>(
    State(service): State<Arc<AssessmentService<P, R>>>,
    axum::Json(request): axum::Json<NewProject>,
) -> Response
where
    P: ProjectRepository + 'static,
    R: AssessmentRepository + 'static,
{
    match service.create_project(request) {
        Ok(project) => (StatusCode::CREATED, axum::Json(project)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<P, R>(
    State(service): State<Arc<AssessmentService<P, R>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    P: ProjectRepository + 'static,
    R: AssessmentRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<P, R>(
    State(service): State<Arc<AssessmentService<P, R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    P: ProjectRepository + 'static,
    R: AssessmentRepository + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<P, R>(
    State(service): State<Arc<AssessmentService<P, R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    P: ProjectRepository + 'static,
    R: AssessmentRepository + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.report(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    let status = match &error {
        AssessmentServiceError::Ingest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, axum::Json(payload)).into_response()
}
