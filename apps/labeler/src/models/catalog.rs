use serde::Deserialize;

/// Raw course catalog row. Column names vary across catalog exports, so
/// every field is optional and resolved through the fallback accessors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseRow {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills_taught: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
}

impl CourseRow {
    /// Course identifier: `title`, falling back to `name`.
    pub fn resolved_title(&self) -> Option<&str> {
        non_empty(self.title.as_deref()).or_else(|| non_empty(self.name.as_deref()))
    }

    /// Skills field: `skills_taught`, falling back to `skills`.
    pub fn resolved_skills(&self) -> Option<&str> {
        non_empty(self.skills_taught.as_deref()).or_else(|| non_empty(self.skills.as_deref()))
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.trim().is_empty())
}
