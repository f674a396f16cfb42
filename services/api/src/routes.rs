use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use maturity_compass::assessment::{
    assessment_router, AssessmentRepository, AssessmentService, ProjectRepository,
};

pub(crate) fn with_assessment_routes<P, R>(service: Arc<AssessmentService<P, R>>) -> axum::Router
where
    P: ProjectRepository + 'static,
    R: AssessmentRepository + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::infra::{InMemoryAssessmentRepository, InMemoryProjectRepository};
    use maturity_compass::assessment::{Locale, QuestionnaireCatalog};

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn questionnaire_is_mounted_alongside_infra_routes() {
        let service = Arc::new(AssessmentService::new(
            Arc::new(InMemoryProjectRepository::default()),
            Arc::new(InMemoryAssessmentRepository::default()),
            Arc::new(QuestionnaireCatalog::standard()),
            Locale::PtBr,
        ));
        let router = with_assessment_routes(service);

        let response = router
            .oneshot(
                axum::http::Request::get("/api/v1/questionnaire")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
