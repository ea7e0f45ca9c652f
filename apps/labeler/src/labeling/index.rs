//! Course Skill Index — course title to normalized skill tokens.

use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use crate::labeling::tokenizer::tokenize;
use crate::models::catalog::CourseRow;

/// Insertion-ordered mapping from course title to its skill tokens. Built
/// once per run from the catalog and read-only afterwards; the scorer's
/// tie-break contract depends on the preserved catalog order.
#[derive(Debug, Clone, Default)]
pub struct CourseSkillIndex {
    courses: IndexMap<String, IndexSet<String>>,
}

impl CourseSkillIndex {
    /// Builds the index from raw catalog rows.
    ///
    /// Titles resolve `title` then `name`; skills resolve `skills_taught`
    /// then `skills` then empty. A later row with the same title replaces
    /// the earlier one's skills (the course keeps its original position).
    /// Rows without a resolvable title can never be suggested and are
    /// skipped. Courses with an empty token set stay in the index; the
    /// scorer skips them.
    pub fn from_catalog(rows: &[CourseRow]) -> Self {
        let mut courses = IndexMap::new();
        for row in rows {
            let Some(title) = row.resolved_title() else {
                warn!("catalog row has neither title nor name; skipping");
                continue;
            };
            courses.insert(title.to_string(), tokenize(row.resolved_skills()));
        }
        Self { courses }
    }

    /// Iterates courses in catalog insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.courses
            .iter()
            .map(|(title, tokens)| (title.as_str(), tokens))
    }

    /// Skill tokens for one course, if present.
    pub fn skills(&self, title: &str) -> Option<&IndexSet<String>> {
        self.courses.get(title)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
