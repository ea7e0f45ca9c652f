use serde::{Deserialize, Serialize};

/// Provenance tag for trusted, manually curated rows.
pub const LABEL_SOURCE_SEED: &str = "seed";
/// Provenance tag for heuristically labeled scraped rows.
pub const LABEL_SOURCE_SCRAPED: &str = "scraped";

/// A scraped job posting. Any field may be absent per row; rows are read
/// once, scored, and discarded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapedJobRow {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
}

impl ScrapedJobRow {
    /// Title and description concatenated for free-text scoring. Absent
    /// fields contribute an empty string.
    pub fn text_blob(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or("")
        )
    }
}

/// One row of the merged dataset. Both outputs share this schema; the
/// field order here is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(rename = "type", default)]
    pub row_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub suggested_courses: String,
    /// Raw confidence value. Empty for seed rows; parsed only when the
    /// high-confidence gate is applied.
    #[serde(default)]
    pub auto_label_confidence: String,
    #[serde(default)]
    pub label_source: String,
}

/// Output header, matching the `DatasetRow` field order.
pub const DATASET_HEADERS: [&str; 8] = [
    "id",
    "type",
    "title",
    "description",
    "skills",
    "suggested_courses",
    "auto_label_confidence",
    "label_source",
];

impl DatasetRow {
    /// Confidence parsed as a float, when present and numeric.
    pub fn confidence(&self) -> Option<f64> {
        self.auto_label_confidence.trim().parse().ok()
    }
}

/// Accepts numeric id cells, treating blank or non-numeric values as absent
/// rather than failing the row.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}
