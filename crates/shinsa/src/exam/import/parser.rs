use std::io::Read;

use super::normalizer::{leading_u32, normalize_header, parse_birth_date};
use super::{ImportedCandidate, DEFAULT_CURRENT_GRADE, DEFAULT_FEDERATION, DEFAULT_TARGET_GRADE};

const NAME_KEYWORDS: &[&str] = &["nome", "name", "candidato", "full_name"];
const EMAIL_KEYWORDS: &[&str] = &["email", "e-mail"];
const BIRTH_KEYWORDS: &[&str] = &["nascimento", "birth", "data_nascimento", "data nasc"];
const FEDERATION_KEYWORDS: &[&str] = &["federação", "federacao", "federation"];
const ASSOCIATION_KEYWORDS: &[&str] = &["associação", "associacao", "association", "clube"];
const CURRENT_GRADE_KEYWORDS: &[&str] =
    &["grau atual", "graduação atual", "current_grade", "faixa atual"];
const TARGET_GRADE_KEYWORDS: &[&str] = &["grau pretendido", "graduação pretendida", "target_grade"];
const REGISTRATION_KEYWORDS: &[&str] = &["zempo", "registro", "registration"];
const YEARS_KEYWORDS: &[&str] = &["anos", "years", "tempo"];
const POINTS_KEYWORDS: &[&str] = &["pontos", "points"];

/// Column indices resolved once per spreadsheet. Federations do not agree on
/// header spelling, so each column is found by keyword rather than position.
struct ColumnMap {
    name: Option<usize>,
    email: Option<usize>,
    birth_date: Option<usize>,
    federation: Option<usize>,
    association: Option<usize>,
    current_grade: Option<usize>,
    target_grade: Option<usize>,
    registration: Option<usize>,
    years: Option<usize>,
    points: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord) -> ColumnMap {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |keywords: &[&str]| {
            normalized
                .iter()
                .position(|header| keywords.iter().any(|keyword| header.contains(keyword)))
        };

        ColumnMap {
            name: find(NAME_KEYWORDS),
            email: find(EMAIL_KEYWORDS),
            birth_date: find(BIRTH_KEYWORDS),
            federation: find(FEDERATION_KEYWORDS),
            association: find(ASSOCIATION_KEYWORDS),
            current_grade: find(CURRENT_GRADE_KEYWORDS),
            target_grade: find(TARGET_GRADE_KEYWORDS),
            registration: find(REGISTRATION_KEYWORDS),
            years: find(YEARS_KEYWORDS),
            points: find(POINTS_KEYWORDS),
        }
    }
}

fn cell<'a>(record: &'a csv::StringRecord, column: Option<usize>) -> Option<&'a str> {
    column
        .and_then(|index| record.get(index))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Parse spreadsheet rows into candidate imports. Rows without a usable name
/// are skipped rather than imported as placeholders.
pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<ImportedCandidate>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = ColumnMap::resolve(csv_reader.headers()?);
    let mut candidates = Vec::new();

    for record in csv_reader.records() {
        let record = record?;

        let Some(full_name) = cell(&record, columns.name) else {
            continue;
        };

        candidates.push(ImportedCandidate {
            full_name: full_name.to_string(),
            email: cell(&record, columns.email).map(str::to_string),
            birth_date: cell(&record, columns.birth_date).and_then(parse_birth_date),
            federation: cell(&record, columns.federation)
                .unwrap_or(DEFAULT_FEDERATION)
                .to_string(),
            association: cell(&record, columns.association).map(str::to_string),
            current_grade: cell(&record, columns.current_grade)
                .unwrap_or(DEFAULT_CURRENT_GRADE)
                .to_string(),
            target_grade: cell(&record, columns.target_grade)
                .unwrap_or(DEFAULT_TARGET_GRADE)
                .to_string(),
            zempo_registration: cell(&record, columns.registration).map(str::to_string),
            registration_years: cell(&record, columns.years)
                .and_then(leading_u32)
                .unwrap_or(0),
            accumulated_points: cell(&record, columns.points)
                .and_then(leading_u32)
                .unwrap_or(0),
        });
    }

    Ok(candidates)
}
