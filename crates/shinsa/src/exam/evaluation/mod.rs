mod builder;
mod domain;

pub use builder::{build, ValidationError};
pub use domain::{
    CandidateSummary, EvaluationId, EvaluationMetadata, EvaluationRecord, EvaluationStatus,
    EvaluationStatusView,
};
