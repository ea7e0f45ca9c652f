//! Dataset merger — seed rows plus confidence-gated auto-labeled rows.

use crate::models::dataset::{DatasetRow, LABEL_SOURCE_SEED};

/// First auto-label id when the seed dataset carries no numeric ids.
const DEFAULT_ID_BASE: i64 = 1000;

/// Both outputs of a merge pass.
#[derive(Debug, Clone)]
pub struct MergedDataset {
    /// All seed rows followed by all auto-labeled rows, insertion order
    /// preserved within each group.
    pub full: Vec<DatasetRow>,
    /// Every seed row, plus auto-labeled rows meeting the confidence gate.
    pub high_confidence: Vec<DatasetRow>,
}

/// First id for auto-labeled rows: one past the highest numeric seed id,
/// or `DEFAULT_ID_BASE` when no seed row carries one.
pub fn next_auto_id(seed: &[DatasetRow]) -> i64 {
    seed.iter()
        .filter_map(|row| row.id)
        .max()
        .map(|max| max + 1)
        .unwrap_or(DEFAULT_ID_BASE)
}

/// Merges seed and auto-labeled rows into the two output datasets.
///
/// Seed rows are tagged `seed` if untagged and are never filtered by
/// `min_score`. An auto-labeled row enters the high-confidence set only
/// when its confidence parses as a number and meets the threshold — an
/// empty or unparseable value fails the gate.
pub fn merge(
    seed: Vec<DatasetRow>,
    auto_labeled: Vec<DatasetRow>,
    min_score: f64,
) -> MergedDataset {
    let mut full = Vec::with_capacity(seed.len() + auto_labeled.len());
    for mut row in seed {
        if row.label_source.trim().is_empty() {
            row.label_source = LABEL_SOURCE_SEED.to_string();
        }
        full.push(row);
    }
    full.extend(auto_labeled);

    let high_confidence = full
        .iter()
        .filter(|row| {
            row.label_source == LABEL_SOURCE_SEED
                || row.confidence().is_some_and(|c| c >= min_score)
        })
        .cloned()
        .collect();

    MergedDataset {
        full,
        high_confidence,
    }
}
