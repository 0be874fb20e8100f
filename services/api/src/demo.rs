use crate::infra::{parse_date, InMemoryCandidateDirectory, InMemoryEvaluationRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::sync::Arc;

use shinsa::error::AppError;
use shinsa::exam::{
    CandidateDirectory, DanGrade, EvaluationMetadata, EvaluationStatus, ExamSection, ExamService,
    GradeCriteria, ScoreSheet, TechniqueScoreList,
};

#[derive(Args, Debug)]
pub(crate) struct CriteriaArgs {
    /// Target grade in federation notation (e.g. "1º DAN")
    #[arg(long)]
    pub(crate) grade: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) evaluation_date: Option<NaiveDate>,
    /// Target grade for the scripted session (defaults to "1º DAN")
    #[arg(long)]
    pub(crate) grade: Option<String>,
    /// Skip the per-technique scoring portion of the demo
    #[arg(long)]
    pub(crate) skip_techniques: bool,
}

pub(crate) fn run_criteria(args: CriteriaArgs) -> Result<(), AppError> {
    let criteria = GradeCriteria::for_value(&args.grade);

    match DanGrade::parse(&args.grade) {
        Some(grade) => println!("Criteria for {}", grade.label()),
        None => println!(
            "Grade '{}' not recognized; showing the base criteria sets",
            args.grade
        ),
    }

    println!("\n{}", ExamSection::Theoretical.label());
    for criterion in criteria.theoretical {
        println!("- {} ({})", criterion.label(), criterion.key());
    }

    println!("\n{}", ExamSection::Practical.label());
    for criterion in criteria.practical {
        println!("- {} ({})", criterion.label(), criterion.key());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        evaluation_date,
        grade,
        skip_techniques,
    } = args;

    let evaluation_date = evaluation_date.unwrap_or_else(|| Local::now().date_naive());
    let target_grade = grade
        .as_deref()
        .and_then(DanGrade::parse)
        .unwrap_or(DanGrade::Shodan);

    println!("Dan examination scoring demo");
    println!(
        "Target grade: {} | evaluation date {}",
        target_grade.label(),
        evaluation_date
    );

    let repository = Arc::new(InMemoryEvaluationRepository::default());
    let directory = Arc::new(InMemoryCandidateDirectory::default());
    let service = Arc::new(ExamService::new(repository, directory.clone()));

    let candidates = match directory.list() {
        Ok(candidates) => candidates,
        Err(err) => {
            println!("Candidate directory unavailable: {err}");
            return Ok(());
        }
    };
    println!("\nCandidates on file:");
    for candidate in &candidates {
        println!(
            "- {} ({}) -> {}",
            candidate.full_name, candidate.id, candidate.target_grade
        );
    }
    let Some(candidate) = candidates.first() else {
        println!("No candidates available; nothing to score.");
        return Ok(());
    };

    let criteria = GradeCriteria::for_grade(target_grade);
    let sample_scores = ["8", "7.5", "9", "6.5", "8", "7", "8.5", "7.5"];

    let mut sheet = ScoreSheet::new();
    println!("\nScoring {} criteria:", criteria.theoretical.len() + criteria.practical.len());
    for (index, criterion) in criteria
        .theoretical
        .iter()
        .chain(criteria.practical.iter())
        .enumerate()
    {
        let raw = sample_scores[index % sample_scores.len()];
        match sheet.edit(*criterion, raw) {
            Some(edited) => {
                sheet = edited;
                println!("- {}: {}", criterion.label(), raw);
            }
            None => println!("- {}: input '{}' rejected", criterion.label(), raw),
        }
    }

    let theoretical = sheet.average(criteria.theoretical);
    let practical = sheet.average(criteria.practical);
    println!("Média Teórica: {theoretical:.2}");
    println!("Média Prática: {practical:.2}");

    let mut techniques = TechniqueScoreList::new();
    if !skip_techniques {
        techniques = techniques
            .add("Ashi-waza", "O-soto-gari")
            .add("Te-waza", "Seoi-nage");
        let graded: Vec<_> = techniques.entries().iter().map(|entry| entry.id).collect();
        for (id, raw) in graded.into_iter().zip(["8.5", "9"]) {
            if let Some(edited) = techniques.edit(id, raw) {
                techniques = edited;
            }
        }

        println!("\nTechnique scoring (média {:.2}):", techniques.average());
        for (category, entries) in techniques.grouped() {
            println!("- {category}");
            for entry in entries {
                match entry.score {
                    Some(score) => println!("  - {}: {:.1}", entry.technique, score),
                    None => println!("  - {}: not graded", entry.technique),
                }
            }
        }
    }

    let metadata = EvaluationMetadata {
        candidate_id: candidate.id.clone(),
        target_grade,
        evaluator_name: "Ricardo Tanaka".to_string(),
        evaluator_grade: "6º DAN".to_string(),
        evaluation_date,
        location: Some("Ginásio Municipal de Santos".to_string()),
        observations: None,
    };

    let record = match service.submit(metadata, &sheet, &techniques, EvaluationStatus::Approved) {
        Ok(record) => record,
        Err(err) => {
            println!("\nSubmission rejected: {err}");
            return Ok(());
        }
    };

    println!(
        "\nSaved evaluation {} -> status {}",
        record.evaluation_id.0,
        record.status.label()
    );
    println!("Nota Final: {:.2}", record.final_average);

    match serde_json::to_string_pretty(&record.status_view()) {
        Ok(json) => println!("Public status payload:\n{json}"),
        Err(err) => println!("Public status payload unavailable: {err}"),
    }

    Ok(())
}
