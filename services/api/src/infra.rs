use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use shinsa::exam::{
    CandidateDirectory, CandidateSummary, DirectoryError, EvaluationId, EvaluationRecord,
    EvaluationRepository, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryEvaluationRepository {
    records: Arc<Mutex<HashMap<EvaluationId, EvaluationRecord>>>,
}

impl EvaluationRepository for InMemoryEvaluationRepository {
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
        let mut records: Vec<EvaluationRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.evaluation_date.cmp(&b.evaluation_date));
        Ok(records)
    }
}

/// Stand-in for the hosted candidate registry, seeded for local sessions.
#[derive(Clone)]
pub(crate) struct InMemoryCandidateDirectory {
    candidates: Vec<CandidateSummary>,
}

impl Default for InMemoryCandidateDirectory {
    fn default() -> Self {
        Self {
            candidates: vec![
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
                CandidateSummary {
                    id: "cand-003".to_string(),
                    full_name: "Marina Lima".to_string(),
                    target_grade: "1º DAN".to_string(),
                },
            ],
        }
    }
}

impl CandidateDirectory for InMemoryCandidateDirectory {
    fn list(&self) -> Result<Vec<CandidateSummary>, DirectoryError> {
        let mut candidates = self.candidates.clone();
        candidates.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(candidates)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
