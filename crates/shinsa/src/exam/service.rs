use std::sync::Arc;

use super::evaluation::{
    self, CandidateSummary, EvaluationId, EvaluationMetadata, EvaluationRecord, EvaluationStatus,
    ValidationError,
};
use super::repository::{
    CandidateDirectory, DirectoryError, EvaluationRepository, RepositoryError,
};
use super::scoring::{ScoreSheet, TechniqueScoreList};

/// Facade composing the record builder with the external collaborators.
pub struct ExamService<R, C> {
    repository: Arc<R>,
    directory: Arc<C>,
}

impl<R, C> ExamService<R, C>
where
    R: EvaluationRepository + 'static,
    C: CandidateDirectory + 'static,
{
    pub fn new(repository: Arc<R>, directory: Arc<C>) -> Self {
        Self {
            repository,
            directory,
        }
    }

    /// Candidates available for selection, as provided by the directory.
    pub fn candidates(&self) -> Result<Vec<CandidateSummary>, ExamServiceError> {
        Ok(self.directory.list()?)
    }

    /// Finalize the current scoring state and hand the record to storage.
    ///
    /// Validation failures and persistence failures both leave the caller's
    /// sheet and technique list untouched; resubmitting with the same state
    /// is always safe.
    pub fn submit(
        &self,
        metadata: EvaluationMetadata,
        sheet: &ScoreSheet,
        techniques: &TechniqueScoreList,
        status: EvaluationStatus,
    ) -> Result<EvaluationRecord, ExamServiceError> {
        let record = evaluation::build(metadata, sheet, techniques, status)?;
        let stored = self.repository.save(record)?;
        Ok(stored)
    }

    /// Fetch one persisted evaluation.
    pub fn evaluation(&self, id: &EvaluationId) -> Result<EvaluationRecord, ExamServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// All persisted evaluations.
    pub fn evaluations(&self) -> Result<Vec<EvaluationRecord>, ExamServiceError> {
        Ok(self.repository.list()?)
    }
}

/// Error raised by the exam service.
#[derive(Debug, thiserror::Error)]
pub enum ExamServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
