use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::evaluation::{EvaluationId, EvaluationMetadata, EvaluationStatus};
use super::grades::{DanGrade, GradeCriteria};
use super::repository::{CandidateDirectory, EvaluationRepository, RepositoryError};
use super::scoring::{ScoreSheet, TechniqueScoreList};
use super::service::{ExamService, ExamServiceError};
use super::techniques::TechniqueCategory;

/// Router builder exposing HTTP endpoints for the examination engine.
pub fn exam_router<R, C>(service: Arc<ExamService<R, C>>) -> Router
where
    R: EvaluationRepository + 'static,
    C: CandidateDirectory + 'static,
{
    Router::new()
        .route("/api/v1/exam/candidates", get(candidates_handler::<R, C>))
        .route("/api/v1/exam/evaluations", post(submit_handler::<R, C>))
        .route(
            "/api/v1/exam/evaluations/:evaluation_id",
            get(evaluation_handler::<R, C>),
        )
        .route("/api/v1/exam/criteria/:grade", get(criteria_handler))
        .route("/api/v1/exam/techniques", get(techniques_handler))
        .with_state(service)
}

/// One raw score field as typed into the summary form.
#[derive(Debug, Deserialize)]
pub struct RawScore {
    pub criterion: String,
    pub value: String,
}

/// One technique selection with its raw score input.
#[derive(Debug, Deserialize)]
pub struct RawTechniqueScore {
    pub category: String,
    pub technique: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitEvaluationRequest {
    pub candidate_id: String,
    pub target_grade: String,
    pub evaluator_name: String,
    pub evaluator_grade: String,
    pub evaluation_date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
    pub status: EvaluationStatus,
    #[serde(default)]
    pub scores: Vec<RawScore>,
    #[serde(default)]
    pub techniques: Vec<RawTechniqueScore>,
}

/// Fold raw form fields into a score sheet.
///
/// Unknown criteria and rejected values are dropped the same way the form
/// drops an invalid keystroke: the accepted portion stands, nothing errors.
fn sheet_from_scores(scores: &[RawScore]) -> ScoreSheet {
    let mut sheet = ScoreSheet::new();
    for raw in scores {
        let Some(criterion) = super::grades::Criterion::from_key(&raw.criterion) else {
            continue;
        };
        if let Some(edited) = sheet.edit(criterion, &raw.value) {
            sheet = edited;
        }
    }
    sheet
}

fn list_from_techniques(techniques: &[RawTechniqueScore]) -> TechniqueScoreList {
    let mut list = TechniqueScoreList::new();
    for raw in techniques {
        let added = list.add(&raw.category, &raw.technique);
        if added.len() == list.len() {
            continue;
        }
        list = added;
        if let Some(entry) = list.entries().last() {
            let id = entry.id;
            if let Some(edited) = list.edit(id, &raw.value) {
                list = edited;
            }
        }
    }
    list
}

pub(crate) async fn submit_handler<R, C>(
    State(service): State<Arc<ExamService<R, C>>>,
    axum::Json(request): axum::Json<SubmitEvaluationRequest>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: CandidateDirectory + 'static,
{
    let Some(target_grade) = DanGrade::parse(&request.target_grade) else {
        let payload = json!({
            "error": format!("unknown target grade '{}'", request.target_grade),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    };

    let sheet = sheet_from_scores(&request.scores);
    let techniques = list_from_techniques(&request.techniques);

    let metadata = EvaluationMetadata {
        candidate_id: request.candidate_id,
        target_grade,
        evaluator_name: request.evaluator_name,
        evaluator_grade: request.evaluator_grade,
        evaluation_date: request.evaluation_date,
        location: request.location,
        observations: request.observations,
    };

    match service.submit(metadata, &sheet, &techniques, request.status) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(ExamServiceError::Validation(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ExamServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            let payload = json!({ "error": format!("evaluation not saved: {reason}") });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(ExamServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "evaluation already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn evaluation_handler<R, C>(
    State(service): State<Arc<ExamService<R, C>>>,
    Path(evaluation_id): Path<String>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: CandidateDirectory + 'static,
{
    let id = EvaluationId(evaluation_id);
    match service.evaluation(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(ExamServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "evaluation not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn candidates_handler<R, C>(
    State(service): State<Arc<ExamService<R, C>>>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: CandidateDirectory + 'static,
{
    match service.candidates() {
        Ok(candidates) => (StatusCode::OK, axum::Json(candidates)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}

/// Active criteria for a grade. Unrecognized grade text falls back to the
/// base sets rather than erroring, mirroring the catalog contract.
pub(crate) async fn criteria_handler(Path(grade): Path<String>) -> Response {
    let criteria = GradeCriteria::for_value(&grade);
    let section = |criteria: &[super::grades::Criterion]| {
        criteria
            .iter()
            .map(|criterion| json!({ "key": criterion.key(), "label": criterion.label() }))
            .collect::<Vec<_>>()
    };

    let payload = json!({
        "grade": grade,
        "theoretical": section(criteria.theoretical),
        "practical": section(criteria.practical),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn techniques_handler() -> Response {
    let catalog = TechniqueCategory::ordered()
        .into_iter()
        .map(|category| {
            json!({
                "category": category.label(),
                "techniques": category.techniques(),
            })
        })
        .collect::<Vec<_>>();

    (StatusCode::OK, axum::Json(catalog)).into_response()
}
