//! Pairwise scorer — per-course match scores for one job.
//!
//! Two entry points over the same index: `score_skills` for the structured
//! skills field and `score_text` for the free-text title+description blob.
//! Three signals compensate for each other: exact token overlap catches
//! catalog-phrase matches, substring overlap catches compound phrasing,
//! and the similarity ratio catches typos and near-duplicates. Fully
//! deterministic; a stable sort keeps catalog order on score ties.

use std::cmp::Ordering;

use indexmap::IndexSet;

use crate::labeling::index::CourseSkillIndex;
use crate::labeling::similarity::sequence_ratio;

/// Weight of the substring-overlap signal in `score_skills`.
const PARTIAL_WEIGHT: f64 = 0.3;
/// Weight of the fuzzy signal in `score_skills`.
const FUZZY_WEIGHT: f64 = 0.5;
/// A (job, course) token pair must exceed this ratio to count as fuzzy.
const TOKEN_RATIO_FLOOR: f64 = 0.75;
/// A course token vs the text blob must exceed this ratio to count.
const TEXT_RATIO_FLOOR: f64 = 0.6;
/// Credit for a fuzzy text hit, scaled by its ratio.
const TEXT_FUZZY_WEIGHT: f64 = 0.5;

/// A course and its match score against one job. Courses scoring zero or
/// below are never emitted — absence means no match.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseMatch {
    pub course: String,
    pub score: f64,
}

/// Scores a job's skill tokens against every course.
///
/// Per course with a non-empty token set:
/// - `exact` = intersection size of the two token sets
/// - `partial` = count of (job, course) pairs where one token is a
///   substring of the other; exact pairs count again, intentionally
/// - `fuzzy` = sum of pair ratios strictly above `TOKEN_RATIO_FLOOR`
/// - `score = exact + 0.3·partial + 0.5·fuzzy`
pub fn score_skills(
    job_tokens: &IndexSet<String>,
    index: &CourseSkillIndex,
) -> Vec<CourseMatch> {
    let mut matches = Vec::new();
    for (course, course_tokens) in index.iter() {
        if course_tokens.is_empty() {
            continue;
        }
        let exact = job_tokens.intersection(course_tokens).count();
        let mut partial = 0usize;
        let mut fuzzy = 0.0;
        for job_token in job_tokens {
            for course_token in course_tokens {
                if job_token.contains(course_token.as_str())
                    || course_token.contains(job_token.as_str())
                {
                    partial += 1;
                }
                let ratio = sequence_ratio(job_token, course_token);
                if ratio > TOKEN_RATIO_FLOOR {
                    fuzzy += ratio;
                }
            }
        }
        let score = exact as f64 + PARTIAL_WEIGHT * partial as f64 + FUZZY_WEIGHT * fuzzy;
        if score > 0.0 {
            matches.push(CourseMatch {
                course: course.to_string(),
                score,
            });
        }
    }
    sort_descending(&mut matches);
    matches
}

/// Scores free text against every course's skill tokens.
///
/// The blob is lowercased once. Each course token adds 1.0 on a literal
/// substring hit; otherwise its ratio against the entire blob (not
/// per-word) adds `0.5·ratio` when strictly above `TEXT_RATIO_FLOOR`.
pub fn score_text(text: &str, index: &CourseSkillIndex) -> Vec<CourseMatch> {
    let blob = text.to_lowercase();
    let mut matches = Vec::new();
    for (course, course_tokens) in index.iter() {
        let mut score = 0.0;
        for token in course_tokens {
            if blob.contains(token.as_str()) {
                score += 1.0;
            } else {
                let ratio = sequence_ratio(token, &blob);
                if ratio > TEXT_RATIO_FLOOR {
                    score += TEXT_FUZZY_WEIGHT * ratio;
                }
            }
        }
        if score > 0.0 {
            matches.push(CourseMatch {
                course: course.to_string(),
                score,
            });
        }
    }
    sort_descending(&mut matches);
    matches
}

/// Stable descending sort — equal scores keep catalog insertion order.
fn sort_descending(matches: &mut [CourseMatch]) {
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
