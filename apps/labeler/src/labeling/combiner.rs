//! Label combiner — merges skill- and text-based scores into one label.

use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::labeling::scorer::CourseMatch;

/// Relative weight of the structured-skill score.
const SKILL_WEIGHT: f64 = 1.0;
/// Relative weight of the free-text score.
const TEXT_WEIGHT: f64 = 0.6;
/// Maximum number of suggested courses per job.
const MAX_SUGGESTIONS: usize = 3;

/// Top-ranked courses for one job, plus the confidence value that gates
/// inclusion in the high-confidence subset.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSuggestion {
    /// Up to three course titles, highest combined score first.
    pub courses: Vec<String>,
    /// Combined score of the top course.
    pub confidence: f64,
}

impl LabelSuggestion {
    /// Semicolon-joined form stored in the `suggested_courses` column.
    pub fn joined(&self) -> String {
        self.courses.join(";")
    }
}

/// Combines the two candidate lists into one ranked suggestion.
///
/// `combined[c] = 1.0·skill_score(c) + 0.6·text_score(c)`, either term 0
/// when the course is absent from that list. Entries are seen skill-list
/// first, then text-list; a stable descending sort keeps that first-seen
/// order on equal scores. Returns `None` when no course matched at all —
/// the job is dropped and no row is emitted for it.
pub fn combine(
    skill_matches: &[CourseMatch],
    text_matches: &[CourseMatch],
) -> Option<LabelSuggestion> {
    let mut combined: IndexMap<&str, f64> = IndexMap::new();
    for m in skill_matches {
        *combined.entry(m.course.as_str()).or_insert(0.0) += SKILL_WEIGHT * m.score;
    }
    for m in text_matches {
        *combined.entry(m.course.as_str()).or_insert(0.0) += TEXT_WEIGHT * m.score;
    }
    if combined.is_empty() {
        return None;
    }

    let mut ranked: Vec<(&str, f64)> = combined.into_iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let confidence = ranked[0].1;
    let courses = ranked
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(course, _)| course.to_string())
        .collect();

    Some(LabelSuggestion { courses, confidence })
}
