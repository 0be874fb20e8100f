use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::exam::evaluation::{
    CandidateSummary, EvaluationId, EvaluationMetadata, EvaluationRecord,
};
use crate::exam::grades::{Criterion, DanGrade};
use crate::exam::repository::{
    CandidateDirectory, DirectoryError, EvaluationRepository, RepositoryError,
};
use crate::exam::scoring::ScoreSheet;
use crate::exam::service::ExamService;

pub(super) fn metadata() -> EvaluationMetadata {
    EvaluationMetadata {
        candidate_id: "cand-001".to_string(),
        target_grade: DanGrade::Shodan,
        evaluator_name: "Ricardo Tanaka".to_string(),
        evaluator_grade: "6º DAN".to_string(),
        evaluation_date: NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date"),
        location: Some("Ginásio Municipal de Santos".to_string()),
        observations: None,
    }
}

pub(super) fn edit(sheet: &ScoreSheet, criterion: Criterion, raw: &str) -> ScoreSheet {
    sheet.edit(criterion, raw).expect("edit accepted")
}

/// First-dan theoretical sheet with all seven active criteria graded.
pub(super) fn shodan_theoretical_sheet() -> ScoreSheet {
    let sheet = ScoreSheet::new();
    let sheet = edit(&sheet, Criterion::History, "8");
    let sheet = edit(&sheet, Criterion::Philosophy, "7");
    let sheet = edit(&sheet, Criterion::Ethics, "9");
    let sheet = edit(&sheet, Criterion::CurrentAffairs, "6");
    let sheet = edit(&sheet, Criterion::TechniqueClassification, "8");
    let sheet = edit(&sheet, Criterion::TechnicalVocabulary, "7");
    edit(&sheet, Criterion::KataEssay, "8")
}

pub(super) fn candidates() -> Vec<CandidateSummary> {
    vec![
        CandidateSummary {
            id: "cand-001".to_string(),
            full_name: "Ana Souza".to_string(),
            target_grade: "1º DAN".to_string(),
        },
        CandidateSummary {
            id: "cand-002".to_string(),
            full_name: "Carlos Pereira".to_string(),
            target_grade: "2º DAN".to_string(),
        },
    ]
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<EvaluationId, EvaluationRecord>>>,
}

impl EvaluationRepository for MemoryRepository {
    fn save(&self, record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.evaluation_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.evaluation_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &EvaluationId) -> Result<Option<EvaluationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct UnavailableRepository;

impl EvaluationRepository for UnavailableRepository {
    fn save(&self, _record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &EvaluationId) -> Result<Option<EvaluationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory;

impl CandidateDirectory for MemoryDirectory {
    fn list(&self) -> Result<Vec<CandidateSummary>, DirectoryError> {
        Ok(candidates())
    }
}

pub(super) fn build_service() -> (
    ExamService<MemoryRepository, MemoryDirectory>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let directory = Arc::new(MemoryDirectory);
    let service = ExamService::new(repository.clone(), directory);
    (service, repository)
}
