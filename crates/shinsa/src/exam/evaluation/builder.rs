use std::sync::atomic::{AtomicU64, Ordering};

use super::super::grades::GradeCriteria;
use super::super::scoring::{final_score, ScoreSheet, TechniqueScoreList};
use super::domain::{EvaluationId, EvaluationMetadata, EvaluationRecord, EvaluationStatus};

/// Submission-time validation failures, surfaced to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("no candidate selected")]
    MissingCandidate,
    #[error("evaluator name is required")]
    MissingEvaluatorName,
    #[error("evaluator grade is required")]
    MissingEvaluatorGrade,
}

static EVALUATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_evaluation_id() -> EvaluationId {
    let id = EVALUATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EvaluationId(format!("aval-{id:06}"))
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Assemble a persistable record from the current in-memory scoring state.
///
/// The averages are computed over the target grade's active criteria; the
/// stored score map keeps every entered criterion, active or not, so values
/// survive a grade switch. Fails without touching anything when required
/// header data is missing.
pub fn build(
    metadata: EvaluationMetadata,
    sheet: &ScoreSheet,
    techniques: &TechniqueScoreList,
    status: EvaluationStatus,
) -> Result<EvaluationRecord, ValidationError> {
    if metadata.candidate_id.trim().is_empty() {
        return Err(ValidationError::MissingCandidate);
    }
    if metadata.evaluator_name.trim().is_empty() {
        return Err(ValidationError::MissingEvaluatorName);
    }
    if metadata.evaluator_grade.trim().is_empty() {
        return Err(ValidationError::MissingEvaluatorGrade);
    }

    let criteria = GradeCriteria::for_grade(metadata.target_grade);
    let theoretical_average = sheet.average(criteria.theoretical);
    let practical_average = sheet.average(criteria.practical);
    let final_average = final_score(theoretical_average, practical_average);

    Ok(EvaluationRecord {
        evaluation_id: next_evaluation_id(),
        candidate_id: metadata.candidate_id,
        target_grade: metadata.target_grade,
        evaluator_name: metadata.evaluator_name,
        evaluator_grade: metadata.evaluator_grade,
        evaluation_date: metadata.evaluation_date,
        location: blank_to_none(metadata.location),
        observations: blank_to_none(metadata.observations),
        scores: sheet.entries().collect(),
        technique_scores: techniques.entries().to_vec(),
        theoretical_average,
        practical_average,
        final_average,
        status,
    })
}
