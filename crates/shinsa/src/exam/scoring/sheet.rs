use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::grades::Criterion;

/// Outcome of parsing one raw score input.
pub(crate) enum ParsedScore {
    Unset,
    Value(f64),
    Rejected,
}

/// Parse raw score input the way the summary form treats a keystroke: empty
/// input unsets the entry, anything that is not a number inside [0, 10] is
/// rejected and the previous value kept.
pub(crate) fn parse_score(raw: &str) -> ParsedScore {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedScore::Unset;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if (0.0..=10.0).contains(&value) => ParsedScore::Value(value),
        _ => ParsedScore::Rejected,
    }
}

/// Per-criterion scores of one evaluation session.
///
/// The sheet is a value: every accepted edit produces a new sheet and the
/// owning context swaps it in, so a rejected keystroke can never leave the
/// model half-applied. Criteria without an entry are unset, which is distinct
/// from an entered 0 at storage time even though both are skipped when
/// averaging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSheet {
    entries: BTreeMap<Criterion, f64>,
}

impl ScoreSheet {
    pub fn new() -> ScoreSheet {
        ScoreSheet::default()
    }

    pub fn get(&self, criterion: Criterion) -> Option<f64> {
        self.entries.get(&criterion).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All currently-set entries, in criterion order.
    pub fn entries(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        self.entries.iter().map(|(criterion, value)| (*criterion, *value))
    }

    /// Apply one edit, returning the updated sheet.
    ///
    /// Empty input unsets the criterion. Returns `None` when the input is
    /// rejected (non-numeric or outside [0, 10]); the caller keeps the prior
    /// sheet, which is exactly what the form does with an invalid keystroke.
    pub fn edit(&self, criterion: Criterion, raw: &str) -> Option<ScoreSheet> {
        let mut next = self.clone();
        match parse_score(raw) {
            ParsedScore::Value(value) => {
                next.entries.insert(criterion, value);
            }
            ParsedScore::Unset => {
                next.entries.remove(&criterion);
            }
            ParsedScore::Rejected => return None,
        }
        Some(next)
    }

    /// Arithmetic mean over the given criteria.
    ///
    /// Entries that are unset or exactly 0 are excluded from the denominator:
    /// a zero counts as "not yet graded" for averaging, matching the grading
    /// commission's established reading of the sheet. Returns 0 when nothing
    /// qualifies.
    pub fn average(&self, criteria: &[Criterion]) -> f64 {
        let values: Vec<f64> = criteria
            .iter()
            .filter_map(|criterion| self.get(*criterion))
            .filter(|value| *value > 0.0)
            .collect();

        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Final grade: unweighted mean of the two section averages, even when one
/// section has no gradable criteria.
pub fn final_score(theoretical_average: f64, practical_average: f64) -> f64 {
    (theoretical_average + practical_average) / 2.0
}
