use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::grades::{Criterion, DanGrade};
use super::super::scoring::TechniqueScoreEntry;

/// Identifier wrapper for persisted evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluationId(pub String);

/// Candidate row as exposed by the external directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub id: String,
    pub full_name: String,
    pub target_grade: String,
}

/// Lifecycle tag attached to a finalized evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    Draft,
    Approved,
    Rejected,
}

impl EvaluationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EvaluationStatus::Draft => "draft",
            EvaluationStatus::Approved => "approved",
            EvaluationStatus::Rejected => "rejected",
        }
    }
}

/// Header data captured alongside the scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationMetadata {
    pub candidate_id: String,
    pub target_grade: DanGrade,
    pub evaluator_name: String,
    pub evaluator_grade: String,
    pub evaluation_date: NaiveDate,
    pub location: Option<String>,
    pub observations: Option<String>,
}

/// The assembled, persistable evaluation.
///
/// `scores` holds every criterion that was actually entered, including ones
/// outside the target grade's active set; unset criteria are omitted rather
/// than stored as zero. The three averages are computed over the active set
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub evaluation_id: EvaluationId,
    pub candidate_id: String,
    pub target_grade: DanGrade,
    pub evaluator_name: String,
    pub evaluator_grade: String,
    pub evaluation_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    pub scores: BTreeMap<Criterion, f64>,
    pub technique_scores: Vec<TechniqueScoreEntry>,
    pub theoretical_average: f64,
    pub practical_average: f64,
    pub final_average: f64,
    pub status: EvaluationStatus,
}

impl EvaluationRecord {
    pub fn status_view(&self) -> EvaluationStatusView {
        EvaluationStatusView {
            evaluation_id: self.evaluation_id.clone(),
            candidate_id: self.candidate_id.clone(),
            target_grade: self.target_grade.value(),
            status: self.status.label(),
            theoretical_average: self.theoretical_average,
            practical_average: self.practical_average,
            final_average: self.final_average,
        }
    }
}

/// Sanitized representation of an evaluation's exposed outcome.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationStatusView {
    pub evaluation_id: EvaluationId,
    pub candidate_id: String,
    pub target_grade: &'static str,
    pub status: &'static str,
    pub theoretical_average: f64,
    pub practical_average: f64,
    pub final_average: f64,
}
