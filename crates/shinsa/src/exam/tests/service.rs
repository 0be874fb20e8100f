use std::sync::Arc;

use super::common::*;
use crate::exam::evaluation::{EvaluationId, EvaluationStatus};
use crate::exam::service::{ExamService, ExamServiceError};
use crate::exam::scoring::{ScoreSheet, TechniqueScoreList};
use crate::exam::{RepositoryError, ValidationError};

#[test]
fn submit_persists_and_returns_the_stored_record() {
    let (service, repository) = build_service();

    let record = service
        .submit(
            metadata(),
            &shodan_theoretical_sheet(),
            &TechniqueScoreList::new(),
            EvaluationStatus::Approved,
        )
        .expect("submission succeeds");

    let stored = repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .get(&record.evaluation_id)
        .cloned()
        .expect("record present");
    assert_eq!(stored, record);
    assert_eq!(stored.status, EvaluationStatus::Approved);
}

#[test]
fn validation_failure_never_reaches_persistence() {
    let (service, repository) = build_service();
    let mut incomplete = metadata();
    incomplete.evaluator_name = String::new();

    let error = service
        .submit(
            incomplete,
            &ScoreSheet::new(),
            &TechniqueScoreList::new(),
            EvaluationStatus::Draft,
        )
        .expect_err("expected validation error");

    assert!(matches!(
        error,
        ExamServiceError::Validation(ValidationError::MissingEvaluatorName)
    ));
    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
}

#[test]
fn persistence_failure_surfaces_the_collaborator_message() {
    let service = ExamService::new(Arc::new(UnavailableRepository), Arc::new(MemoryDirectory));

    let error = service
        .submit(
            metadata(),
            &shodan_theoretical_sheet(),
            &TechniqueScoreList::new(),
            EvaluationStatus::Draft,
        )
        .expect_err("expected repository error");

    match error {
        ExamServiceError::Repository(RepositoryError::Unavailable(reason)) => {
            assert!(reason.contains("offline"));
        }
        other => panic!("expected unavailable repository, got {other:?}"),
    }
}

#[test]
fn evaluation_lookup_distinguishes_missing_records() {
    let (service, _) = build_service();

    let error = service
        .evaluation(&EvaluationId("aval-missing".to_string()))
        .expect_err("expected not found");
    assert!(matches!(
        error,
        ExamServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn candidates_come_back_in_directory_order() {
    let (service, _) = build_service();

    let listed = service.candidates().expect("directory available");
    assert_eq!(listed, candidates());
}
