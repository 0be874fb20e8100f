use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

use shinsa::error::AppError;
use shinsa::exam::{
    exam_router, CandidateDirectory, CandidateImporter, EvaluationRepository, ExamService,
    ImportedCandidate,
};

pub(crate) fn with_exam_routes<R, C>(service: Arc<ExamService<R, C>>) -> axum::Router
where
    R: EvaluationRepository + 'static,
    C: CandidateDirectory + 'static,
{
    exam_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/exam/candidates/import",
            axum::routing::post(import_candidates_endpoint),
        )
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

#[derive(Debug, Deserialize)]
pub(crate) struct ImportCandidatesRequest {
    pub(crate) csv: String,
}

/// Parse an uploaded spreadsheet export into candidate previews. The rows are
/// returned for confirmation; nothing is written to the registry here.
pub(crate) async fn import_candidates_endpoint(
    Json(payload): Json<ImportCandidatesRequest>,
) -> Result<Json<Vec<ImportedCandidate>>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let candidates = CandidateImporter::from_reader(reader)?;
    Ok(Json(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn import_endpoint_parses_spreadsheet_rows() {
        let request = ImportCandidatesRequest {
            csv: "Nome,Grau Pretendido\nAna Souza,1º DAN\n".to_string(),
        };

        let Json(candidates) = import_candidates_endpoint(Json(request))
            .await
            .expect("import succeeds");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].full_name, "Ana Souza");
        assert_eq!(candidates[0].target_grade, "1º DAN");
    }

    #[tokio::test]
    async fn import_endpoint_skips_unnamed_rows() {
        let request = ImportCandidatesRequest {
            csv: "Nome,Federação\n,FPJUDO\n".to_string(),
        };

        let Json(candidates) = import_candidates_endpoint(Json(request))
            .await
            .expect("import succeeds");

        assert!(candidates.is_empty());
    }
}
