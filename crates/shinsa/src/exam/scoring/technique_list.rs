use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::super::techniques;
use super::sheet::{parse_score, ParsedScore};

/// Identifier wrapper for technique score entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

static ENTRY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_entry_id() -> EntryId {
    EntryId(ENTRY_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// One ad-hoc technique grade added during the practical examination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueScoreEntry {
    pub id: EntryId,
    pub category: String,
    pub technique: String,
    pub score: Option<f64>,
    pub video_url: Option<String>,
}

/// Ordered list of technique grades.
///
/// The list does not own any storage: each operation returns the new value
/// and the caller holds the canonical list, reducer-style. A technique name
/// appears at most once across the whole list regardless of category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechniqueScoreList {
    entries: Vec<TechniqueScoreEntry>,
}

impl TechniqueScoreList {
    pub fn new() -> TechniqueScoreList {
        TechniqueScoreList::default()
    }

    pub fn entries(&self) -> &[TechniqueScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, technique: &str) -> bool {
        self.entries.iter().any(|entry| entry.technique == technique)
    }

    /// Append a technique with an unset score, attaching the catalog's
    /// reference video when one exists.
    ///
    /// No-ops (returns an unchanged copy) when either argument is empty or
    /// the technique is already listed; the duplicate check is a
    /// case-sensitive match on the technique name alone.
    pub fn add(&self, category: &str, technique: &str) -> TechniqueScoreList {
        if category.is_empty() || technique.is_empty() || self.contains(technique) {
            return self.clone();
        }

        let video_url = techniques::find_technique(category, technique)
            .and_then(|known| known.video_url)
            .map(str::to_string);

        let mut next = self.clone();
        next.entries.push(TechniqueScoreEntry {
            id: next_entry_id(),
            category: category.to_string(),
            technique: technique.to_string(),
            score: None,
            video_url,
        });
        next
    }

    /// Apply a score edit to one entry; same contract as the criteria sheet.
    ///
    /// Returns `None` when the input is rejected, leaving the caller's list
    /// untouched. Editing an unknown id is accepted and changes nothing.
    pub fn edit(&self, id: EntryId, raw: &str) -> Option<TechniqueScoreList> {
        let parsed = match parse_score(raw) {
            ParsedScore::Value(value) => Some(value),
            ParsedScore::Unset => None,
            ParsedScore::Rejected => return None,
        };

        let mut next = self.clone();
        if let Some(entry) = next.entries.iter_mut().find(|entry| entry.id == id) {
            entry.score = parsed;
        }
        Some(next)
    }

    /// Remove an entry by id; removing an unknown id is a no-op.
    pub fn remove(&self, id: EntryId) -> TechniqueScoreList {
        let mut next = self.clone();
        next.entries.retain(|entry| entry.id != id);
        next
    }

    /// Mean over graded entries, with the same zero-exclusion policy as the
    /// criteria sheet. Returns 0 when nothing qualifies.
    pub fn average(&self) -> f64 {
        let values: Vec<f64> = self
            .entries
            .iter()
            .filter_map(|entry| entry.score)
            .filter(|score| *score > 0.0)
            .collect();

        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Entries grouped by category in first-seen order, for rendering.
    pub fn grouped(&self) -> Vec<(&str, Vec<&TechniqueScoreEntry>)> {
        let mut groups: Vec<(&str, Vec<&TechniqueScoreEntry>)> = Vec::new();
        for entry in &self.entries {
            match groups
                .iter()
                .position(|(category, _)| *category == entry.category)
            {
                Some(index) => groups[index].1.push(entry),
                None => groups.push((entry.category.as_str(), vec![entry])),
            }
        }
        groups
    }
}
