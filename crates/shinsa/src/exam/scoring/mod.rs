mod sheet;
mod technique_list;

pub use sheet::{final_score, ScoreSheet};
pub use technique_list::{EntryId, TechniqueScoreEntry, TechniqueScoreList};
