//! Dan-grade examination engine: grade and technique catalogs, the scoring
//! sheet, the technique score list, and the evaluation record pipeline.
//!
//! Scoring state is held by the caller and threaded through pure transforms;
//! the service facade at the bottom of the module tree is the only place that
//! talks to the external persistence and directory collaborators.

pub mod evaluation;
pub mod grades;
pub mod import;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod techniques;

#[cfg(test)]
mod tests;

pub use evaluation::{
    CandidateSummary, EvaluationId, EvaluationMetadata, EvaluationRecord, EvaluationStatus,
    EvaluationStatusView, ValidationError,
};
pub use grades::{BeltColor, Criterion, DanGrade, ExamSection, GradeCriteria};
pub use import::{
    CandidateExtractor, CandidateImporter, ExtractionError, ImportError, ImportedCandidate,
};
pub use repository::{CandidateDirectory, DirectoryError, EvaluationRepository, RepositoryError};
pub use router::exam_router;
pub use scoring::{final_score, EntryId, ScoreSheet, TechniqueScoreEntry, TechniqueScoreList};
pub use service::{ExamService, ExamServiceError};
pub use techniques::{categories, find_technique, techniques_of, Technique, TechniqueCategory};
