//! Integration specifications for the dan examination scoring workflow.
//!
//! Scenarios drive the public service facade and HTTP router end to end:
//! catalog lookups, keystroke-level score edits, record assembly, and the
//! persistence boundary, without reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;

    use shinsa::exam::{
        CandidateDirectory, CandidateSummary, DirectoryError, EvaluationId, EvaluationMetadata,
        EvaluationRecord, EvaluationRepository, ExamService, DanGrade, RepositoryError,
    };

    pub(super) fn metadata() -> EvaluationMetadata {
        EvaluationMetadata {
            candidate_id: "cand-001".to_string(),
            target_grade: DanGrade::Shodan,
            evaluator_name: "Ricardo Tanaka".to_string(),
            evaluator_grade: "6º DAN".to_string(),
            evaluation_date: NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date"),
            location: Some("Ginásio Municipal de Santos".to_string()),
            observations: Some("Excelente postura durante os katas.".to_string()),
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryRepository {
        pub(super) records: Arc<Mutex<HashMap<EvaluationId, EvaluationRecord>>>,
    }

    impl EvaluationRepository for MemoryRepository {
        fn save(&self, record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if guard.contains_key(&record.evaluation_id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.evaluation_id.clone(), record.clone());
            Ok(record)
        }

        fn fetch(&self, id: &EvaluationId) -> Result<Option<EvaluationRecord>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.get(id).cloned())
        }

        fn list(&self) -> Result<Vec<EvaluationRecord>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.values().cloned().collect())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryDirectory;

    impl CandidateDirectory for MemoryDirectory {
        fn list(&self) -> Result<Vec<CandidateSummary>, DirectoryError> {
            Ok(vec![
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
            ])
        }
    }

    pub(super) fn build_service() -> (
        ExamService<MemoryRepository, MemoryDirectory>,
        Arc<MemoryRepository>,
    ) {
        let repository = Arc::new(MemoryRepository::default());
        let service = ExamService::new(repository.clone(), Arc::new(MemoryDirectory));
        (service, repository)
    }
}

mod scoring_session {
    use super::common::*;
    use shinsa::exam::{
        Criterion, DanGrade, EvaluationStatus, GradeCriteria, ScoreSheet, TechniqueScoreList,
    };

    #[test]
    fn full_first_dan_session_produces_the_expected_averages() {
        let (service, repository) = build_service();

        let mut sheet = ScoreSheet::new();
        for (criterion, raw) in [
            (Criterion::History, "8"),
            (Criterion::Philosophy, "7"),
            (Criterion::Ethics, "9"),
            (Criterion::CurrentAffairs, "6"),
            (Criterion::TechniqueClassification, "8"),
            (Criterion::TechnicalVocabulary, "7"),
            (Criterion::KataEssay, "8"),
            (Criterion::NageNoKata, "8"),
            (Criterion::NageWaza, "6"),
        ] {
            sheet = sheet.edit(criterion, raw).expect("score accepted");
        }

        // A stray keystroke outside the range must leave the sheet intact.
        assert!(sheet.edit(Criterion::NageWaza, "66").is_none());

        let mut techniques = TechniqueScoreList::new()
            .add("Ashi-waza", "O-soto-gari")
            .add("Ashi-waza", "O-soto-gari");
        assert_eq!(techniques.len(), 1);
        let entry = techniques.entries()[0].id;
        techniques = techniques.edit(entry, "8.5").expect("score accepted");

        let record = service
            .submit(metadata(), &sheet, &techniques, EvaluationStatus::Approved)
            .expect("submission succeeds");

        assert!((record.theoretical_average - 53.0 / 7.0).abs() < 1e-9);
        assert_eq!(record.practical_average, 7.0);
        assert!((record.final_average - (53.0 / 7.0 + 7.0) / 2.0).abs() < 1e-9);
        assert_eq!(record.technique_scores.len(), 1);

        let stored = repository.records.lock().expect("lock");
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn switching_target_grade_and_back_restores_the_same_values() {
        let mut sheet = ScoreSheet::new();
        sheet = sheet.edit(Criterion::CurrentAffairs, "6").expect("accepted");
        sheet = sheet.edit(Criterion::History, "8").expect("accepted");

        let sandan = GradeCriteria::for_grade(DanGrade::Sandan);
        assert!(!sandan.theoretical.contains(&Criterion::CurrentAffairs));
        assert_eq!(sheet.average(sandan.theoretical), 8.0);

        let shodan = GradeCriteria::for_grade(DanGrade::Shodan);
        assert_eq!(sheet.get(Criterion::CurrentAffairs), Some(6.0));
        assert_eq!(sheet.average(shodan.theoretical), 7.0);
    }

    #[test]
    fn draft_submissions_keep_their_lifecycle_tag() {
        let (service, _) = build_service();

        let record = service
            .submit(
                metadata(),
                &ScoreSheet::new(),
                &TechniqueScoreList::new(),
                EvaluationStatus::Draft,
            )
            .expect("draft saves");

        assert_eq!(record.status, EvaluationStatus::Draft);
        assert_eq!(record.final_average, 0.0);
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use shinsa::exam::{exam_router, ExamService};

    fn build_router() -> axum::Router {
        let repository = Arc::new(MemoryRepository::default());
        let service = Arc::new(ExamService::new(repository, Arc::new(MemoryDirectory)));
        exam_router(service)
    }

    #[tokio::test]
    async fn submitted_evaluation_can_be_fetched_back() {
        let router = build_router();
        let payload = json!({
            "candidate_id": "cand-001",
            "target_grade": "1º DAN",
            "evaluator_name": "Ricardo Tanaka",
            "evaluator_grade": "6º DAN",
            "evaluation_date": "2026-03-14",
            "status": "approved",
            "scores": [
                { "criterion": "teoria_historico", "value": "8" },
                { "criterion": "pratica_nage_waza", "value": "6" }
            ]
        });

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/exam/evaluations")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).expect("serialize")))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let created: Value = serde_json::from_slice(&body).expect("json");
        let evaluation_id = created
            .get("evaluation_id")
            .and_then(Value::as_str)
            .expect("evaluation id");

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/v1/exam/evaluations/{evaluation_id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let fetched: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(fetched.get("target_grade"), Some(&json!("1º DAN")));
        assert_eq!(
            fetched
                .get("scores")
                .and_then(|scores| scores.get("teoria_historico"))
                .and_then(Value::as_f64),
            Some(8.0)
        );
    }
}
