//! Training example preparation for the downstream classifier.
//!
//! The classifier itself (vectorization, network, training loop) lives
//! outside this tool; this module only derives the (text, labels) pairs it
//! consumes from a merged dataset.

use serde::Serialize;

use crate::models::dataset::DatasetRow;

/// One multi-label training example: free text plus course labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingExample {
    pub text: String,
    pub labels: Vec<String>,
}

/// Extracts the rows usable for training: job rows carrying at least one
/// suggested course.
///
/// Text joins the non-empty title/description/skills fields with newlines;
/// labels split `suggested_courses` on `;`, trimmed, empties dropped.
pub fn training_examples(rows: &[DatasetRow]) -> Vec<TrainingExample> {
    rows.iter()
        .filter(|row| row.row_type.eq_ignore_ascii_case("job"))
        .filter_map(|row| {
            let labels = parse_labels(&row.suggested_courses);
            if labels.is_empty() {
                return None;
            }
            let text = [
                row.title.as_str(),
                row.description.as_str(),
                row.skills.as_str(),
            ]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n");
            Some(TrainingExample { text, labels })
        })
        .collect()
}

/// Splits a semicolon-joined label list, dropping empty pieces.
pub fn parse_labels(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
