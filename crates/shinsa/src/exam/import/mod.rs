//! Candidate intake from federation spreadsheets and scanned documents.
//!
//! Spreadsheets (CSV exports) are parsed locally with keyword-matched
//! headers. Binary documents go through the external text-extraction
//! collaborator; whatever it returns is normalized with the same defaulting
//! rules before anything reaches the registry.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_FEDERATION: &str = "Não informada";
pub(crate) const DEFAULT_CURRENT_GRADE: &str = "1º KYÛ";
pub(crate) const DEFAULT_TARGET_GRADE: &str = "1º DAN";

/// Candidate fields as recovered from an imported file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedCandidate {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    pub federation: String,
    #[serde(default)]
    pub association: Option<String>,
    pub current_grade: String,
    pub target_grade: String,
    #[serde(default)]
    pub zempo_registration: Option<String>,
    #[serde(default)]
    pub registration_years: u32,
    #[serde(default)]
    pub accumulated_points: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read candidate file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate spreadsheet: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// External collaborator turning raw document text into candidate field sets.
pub trait CandidateExtractor {
    fn extract(
        &self,
        file_name: &str,
        text: &str,
    ) -> Result<Vec<ImportedCandidate>, ExtractionError>;
}

/// Failures reported by the text-extraction collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no text could be extracted from the document")]
    EmptyDocument,
    #[error("extraction service unavailable: {0}")]
    Unavailable(String),
    #[error("extraction returned malformed data: {0}")]
    Malformed(String),
}

pub struct CandidateImporter;

impl CandidateImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedCandidate>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedCandidate>, ImportError> {
        Ok(parser::parse_rows(reader)?)
    }

    /// Import candidates from document text via the extraction collaborator.
    ///
    /// The collaborator's output is best-effort; each returned candidate is
    /// run through the same defaulting rules as a spreadsheet row, and rows
    /// without a usable name are dropped.
    pub fn from_document<E: CandidateExtractor>(
        extractor: &E,
        file_name: &str,
        text: &str,
    ) -> Result<Vec<ImportedCandidate>, ImportError> {
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyDocument.into());
        }

        let extracted = extractor.extract(file_name, text)?;
        Ok(extracted.into_iter().filter_map(sanitize).collect())
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn sanitize(candidate: ImportedCandidate) -> Option<ImportedCandidate> {
    let full_name = candidate.full_name.trim();
    if full_name.is_empty() {
        return None;
    }

    let or_default = |value: String, fallback: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            fallback.to_string()
        } else {
            trimmed.to_string()
        }
    };

    Some(ImportedCandidate {
        full_name: full_name.to_string(),
        email: blank_to_none(candidate.email),
        birth_date: candidate.birth_date,
        federation: or_default(candidate.federation, DEFAULT_FEDERATION),
        association: blank_to_none(candidate.association),
        current_grade: or_default(candidate.current_grade, DEFAULT_CURRENT_GRADE),
        target_grade: or_default(candidate.target_grade, DEFAULT_TARGET_GRADE),
        zempo_registration: blank_to_none(candidate.zempo_registration),
        registration_years: candidate.registration_years,
        accumulated_points: candidate.accumulated_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    #[test]
    fn parse_birth_date_supports_iso_and_brazilian_formats() {
        let iso = normalizer::parse_birth_date_for_tests("1990-03-15").expect("parse iso");
        assert_eq!(iso, NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());

        let brazilian = normalizer::parse_birth_date_for_tests("15/03/1990").expect("parse dd/mm");
        assert_eq!(brazilian, NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());

        let dashed = normalizer::parse_birth_date_for_tests("5-3-1990").expect("parse d-m");
        assert_eq!(dashed, NaiveDate::from_ymd_opt(1990, 3, 5).unwrap());

        assert!(normalizer::parse_birth_date_for_tests("  ").is_none());
        assert!(normalizer::parse_birth_date_for_tests("not-a-date").is_none());
    }

    #[test]
    fn importer_matches_headers_by_keyword() {
        let csv = "\u{feff}Nome do Candidato,E-mail,Data de Nascimento,Federação,Grau Pretendido,Anos de Registro\n\
Carlos Pereira,carlos@dojo.br,12/07/1988,FPJUDO,2º DAN,9\n";
        let candidates =
            CandidateImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert_eq!(candidate.full_name, "Carlos Pereira");
        assert_eq!(candidate.email.as_deref(), Some("carlos@dojo.br"));
        assert_eq!(
            candidate.birth_date,
            Some(NaiveDate::from_ymd_opt(1988, 7, 12).unwrap())
        );
        assert_eq!(candidate.federation, "FPJUDO");
        assert_eq!(candidate.target_grade, "2º DAN");
        assert_eq!(candidate.registration_years, 9);
    }

    #[test]
    fn importer_defaults_missing_columns() {
        let csv = "Nome\nAna Souza\n";
        let candidates =
            CandidateImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert_eq!(candidate.federation, DEFAULT_FEDERATION);
        assert_eq!(candidate.current_grade, DEFAULT_CURRENT_GRADE);
        assert_eq!(candidate.target_grade, DEFAULT_TARGET_GRADE);
        assert_eq!(candidate.registration_years, 0);
        assert_eq!(candidate.accumulated_points, 0);
        assert!(candidate.email.is_none());
    }

    #[test]
    fn importer_skips_rows_without_a_name() {
        let csv = "Nome,Federação\n,FPJUDO\nAna Souza,FPJ\n";
        let candidates =
            CandidateImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].full_name, "Ana Souza");
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = CandidateImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            ImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    struct FixedExtractor(Vec<ImportedCandidate>);

    impl CandidateExtractor for FixedExtractor {
        fn extract(
            &self,
            _file_name: &str,
            _text: &str,
        ) -> Result<Vec<ImportedCandidate>, ExtractionError> {
            Ok(self.0.clone())
        }
    }

    fn extracted(full_name: &str) -> ImportedCandidate {
        ImportedCandidate {
            full_name: full_name.to_string(),
            email: Some("  ".to_string()),
            birth_date: None,
            federation: String::new(),
            association: None,
            current_grade: String::new(),
            target_grade: "2º DAN".to_string(),
            zempo_registration: None,
            registration_years: 4,
            accumulated_points: 120,
        }
    }

    #[test]
    fn document_import_rejects_empty_text() {
        let extractor = FixedExtractor(Vec::new());
        let error = CandidateImporter::from_document(&extractor, "lista.pdf", "   ")
            .expect_err("expected empty document error");

        match error {
            ImportError::Extraction(ExtractionError::EmptyDocument) => {}
            other => panic!("expected empty document error, got {other:?}"),
        }
    }

    #[test]
    fn document_import_sanitizes_collaborator_output() {
        let extractor = FixedExtractor(vec![extracted("  Marina Lima  "), extracted("   ")]);
        let candidates =
            CandidateImporter::from_document(&extractor, "lista.pdf", "conteúdo extraído")
                .expect("import succeeds");

        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert_eq!(candidate.full_name, "Marina Lima");
        assert!(candidate.email.is_none());
        assert_eq!(candidate.federation, DEFAULT_FEDERATION);
        assert_eq!(candidate.current_grade, DEFAULT_CURRENT_GRADE);
        assert_eq!(candidate.target_grade, "2º DAN");
        assert_eq!(candidate.accumulated_points, 120);
    }

    #[test]
    fn extraction_failures_surface_with_reason() {
        struct FailingExtractor;

        impl CandidateExtractor for FailingExtractor {
            fn extract(
                &self,
                _file_name: &str,
                _text: &str,
            ) -> Result<Vec<ImportedCandidate>, ExtractionError> {
                Err(ExtractionError::Unavailable("gateway timeout".to_string()))
            }
        }

        let error = CandidateImporter::from_document(&FailingExtractor, "lista.pdf", "texto")
            .expect_err("expected extraction failure");
        assert!(error.to_string().contains("gateway timeout"));
    }
}
