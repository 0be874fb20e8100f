use super::evaluation::{CandidateSummary, EvaluationId, EvaluationRecord};

/// Storage abstraction for finalized evaluations so the engine can be
/// exercised against in-memory fakes and the hosted backend alike.
///
/// A failing `save` means the record was not submitted; callers keep their
/// in-memory state and may retry the same submission unchanged.
pub trait EvaluationRepository: Send + Sync {
    fn save(&self, record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError>;
    fn fetch(&self, id: &EvaluationId) -> Result<Option<EvaluationRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<EvaluationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Read side of the external candidate registry.
pub trait CandidateDirectory: Send + Sync {
    /// Candidates ordered by full name.
    fn list(&self) -> Result<Vec<CandidateSummary>, DirectoryError>;
}

/// Error raised by the candidate directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("candidate directory unavailable: {0}")]
    Unavailable(String),
}
