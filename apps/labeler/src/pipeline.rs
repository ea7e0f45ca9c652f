//! One-shot batch pipeline: load, score, label, merge, write.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::dataset::{loader, merger, training, writer};
use crate::errors::AppError;
use crate::labeling::combiner::combine;
use crate::labeling::index::CourseSkillIndex;
use crate::labeling::scorer::{score_skills, score_text};
use crate::labeling::tokenizer::tokenize;
use crate::models::dataset::{DatasetRow, LABEL_SOURCE_SCRAPED};

/// Counts and identifiers for one completed run, logged at exit.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub catalog_courses: usize,
    pub seed_rows: usize,
    pub scraped_jobs: usize,
    pub auto_labeled: usize,
    pub dropped_jobs: usize,
    pub full_rows: usize,
    pub high_confidence_rows: usize,
    /// Rows of the high-confidence set usable as training examples.
    pub training_examples: usize,
    pub out_path: String,
    pub high_confidence_path: String,
}

/// Runs the full labeling pass.
///
/// Only resource-level failures abort (missing catalog or seed file,
/// unwritable output); per-row anomalies degrade inside the components.
/// Outputs are written once, fully formed, at the end.
pub fn run(config: &Config) -> Result<RunSummary, AppError> {
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();

    let catalog = loader::load_catalog(&config.catalog_path)?;
    let index = CourseSkillIndex::from_catalog(&catalog);
    info!(courses = index.len(), "course skill index built");

    let seed = loader::load_seed(&config.seed_path)?;
    info!(rows = seed.len(), "seed dataset loaded");

    let scraped = loader::load_scraped(&config.scraped_paths);
    info!(
        jobs = scraped.len(),
        sources = config.scraped_paths.len(),
        "scraped sources loaded"
    );

    let mut next_id = merger::next_auto_id(&seed);
    let mut auto_labeled = Vec::new();
    let mut dropped_jobs = 0usize;
    for job in &scraped {
        let job_tokens = tokenize(job.skills.as_deref());
        let skill_matches = score_skills(&job_tokens, &index);
        let text_matches = score_text(&job.text_blob(), &index);
        let Some(suggestion) = combine(&skill_matches, &text_matches) else {
            dropped_jobs += 1;
            debug!(
                title = job.title.as_deref().unwrap_or(""),
                "no course matched; job dropped"
            );
            continue;
        };
        auto_labeled.push(DatasetRow {
            id: Some(next_id),
            row_type: "Job".to_string(),
            title: job.title.clone().unwrap_or_default(),
            description: job.description.clone().unwrap_or_default(),
            skills: job.skills.clone().unwrap_or_default(),
            suggested_courses: suggestion.joined(),
            auto_label_confidence: suggestion.confidence.to_string(),
            label_source: LABEL_SOURCE_SCRAPED.to_string(),
        });
        next_id += 1;
    }
    info!(
        labeled = auto_labeled.len(),
        dropped = dropped_jobs,
        "auto-labeling complete"
    );

    let seed_rows = seed.len();
    let scraped_jobs = scraped.len();
    let auto_count = auto_labeled.len();

    let merged = merger::merge(seed, auto_labeled, config.min_score);
    let training_examples = training::training_examples(&merged.high_confidence).len();

    writer::write_dataset(&config.out_path, &merged.full)?;
    writer::write_dataset(&config.high_confidence_path, &merged.high_confidence)?;
    info!(
        full = merged.full.len(),
        high_confidence = merged.high_confidence.len(),
        min_score = config.min_score,
        "datasets written"
    );

    Ok(RunSummary {
        run_id,
        started_at,
        finished_at: Utc::now(),
        catalog_courses: index.len(),
        seed_rows,
        scraped_jobs,
        auto_labeled: auto_count,
        dropped_jobs,
        full_rows: merged.full.len(),
        high_confidence_rows: merged.high_confidence.len(),
        training_examples,
        out_path: config.out_path.display().to_string(),
        high_confidence_path: config.high_confidence_path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn make_config(dir: &Path, scraped: Vec<PathBuf>, min_score: f64) -> Config {
        Config {
            catalog_path: dir.join("mock_courses.csv"),
            seed_path: dir.join("mock_data.csv"),
            scraped_paths: scraped,
            min_score,
            out_path: dir.join("merged_data.csv"),
            high_confidence_path: dir.join("merged_data_highconf.csv"),
            rust_log: "info".to_string(),
        }
    }

    const CATALOG: &str = "title,skills_taught\n\
        DataSci101,\"python, sql\"\n\
        ML Advanced,machine learning\n";

    const SEED: &str = "id,type,title,description,skills,suggested_courses\n\
        1,Job,Data Analyst,Reporting dashboards,\"sql;excel\",DataSci101\n";

    #[test]
    fn test_missing_catalog_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "mock_data.csv", SEED);
        let config = make_config(dir.path(), vec![], 0.5);

        let err = run(&config).unwrap_err();
        assert!(matches!(err, AppError::CatalogMissing(_)));
        assert!(!config.out_path.exists());
        assert!(!config.high_confidence_path.exists());
    }

    #[test]
    fn test_no_scraped_sources_still_produces_outputs() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "mock_courses.csv", CATALOG);
        write_file(dir.path(), "mock_data.csv", SEED);
        let config = make_config(dir.path(), vec![dir.path().join("absent.csv")], 0.5);

        let summary = run(&config).unwrap();
        assert_eq!(summary.scraped_jobs, 0);
        assert_eq!(summary.auto_labeled, 0);
        assert_eq!(summary.full_rows, 1);
        assert_eq!(summary.high_confidence_rows, 1);

        let full = loader::load_seed(&config.out_path).unwrap();
        assert_eq!(full[0].label_source, "seed");
    }

    #[test]
    fn test_skill_match_labels_job() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "mock_courses.csv", CATALOG);
        write_file(dir.path(), "mock_data.csv", SEED);
        let scraped = write_file(
            dir.path(),
            "scraped.csv",
            "title,description,skills\nBI Developer,Builds reports,Python; SQL; Excel\n",
        );
        let config = make_config(dir.path(), vec![scraped], 0.5);

        let summary = run(&config).unwrap();
        assert_eq!(summary.auto_labeled, 1);
        assert_eq!(summary.dropped_jobs, 0);

        let full = loader::load_seed(&config.out_path).unwrap();
        let labeled = &full[1];
        assert_eq!(labeled.id, Some(2));
        assert_eq!(labeled.row_type, "Job");
        assert_eq!(labeled.label_source, "scraped");
        assert!(labeled.suggested_courses.contains("DataSci101"));
        assert!(labeled.confidence().unwrap() >= 2.0);
    }

    #[test]
    fn test_text_only_match_passes_default_gate() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "mock_courses.csv", CATALOG);
        write_file(dir.path(), "mock_data.csv", SEED);
        let scraped = write_file(
            dir.path(),
            "scraped.csv",
            "title,description,skills\nResearcher,Applied machine learning role,\n",
        );
        let config = make_config(dir.path(), vec![scraped], 0.5);

        let summary = run(&config).unwrap();
        assert_eq!(summary.auto_labeled, 1);

        // skill score 0, text score 1.0, combined 0.6
        let full = loader::load_seed(&config.out_path).unwrap();
        let labeled = &full[1];
        assert_eq!(labeled.suggested_courses, "ML Advanced");
        assert!((labeled.confidence().unwrap() - 0.6).abs() < 1e-9);

        let high = loader::load_seed(&config.high_confidence_path).unwrap();
        assert_eq!(high.len(), 2);
    }

    #[test]
    fn test_low_confidence_row_kept_in_full_only() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "mock_courses.csv", CATALOG);
        write_file(dir.path(), "mock_data.csv", SEED);
        let scraped = write_file(
            dir.path(),
            "scraped.csv",
            "title,description,skills\nResearcher,Applied machine learning role,\n",
        );
        let config = make_config(dir.path(), vec![scraped], 0.9);

        run(&config).unwrap();
        let full = loader::load_seed(&config.out_path).unwrap();
        let high = loader::load_seed(&config.high_confidence_path).unwrap();
        assert_eq!(full.len(), 2);
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].label_source, "seed");
    }

    #[test]
    fn test_unmatched_jobs_dropped() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "mock_courses.csv", CATALOG);
        write_file(dir.path(), "mock_data.csv", SEED);
        let scraped = write_file(
            dir.path(),
            "scraped.csv",
            "title,description,skills\nForklift Operator,Warehouse shifts,\n",
        );
        let config = make_config(dir.path(), vec![scraped], 0.5);

        let summary = run(&config).unwrap();
        assert_eq!(summary.auto_labeled, 0);
        assert_eq!(summary.dropped_jobs, 1);
        assert_eq!(summary.full_rows, 1);
    }

    #[test]
    fn test_duplicate_jobs_across_sources_get_distinct_ids() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "mock_courses.csv", CATALOG);
        write_file(dir.path(), "mock_data.csv", SEED);
        let row = "title,description,skills\nBI Developer,Builds reports,Python; SQL\n";
        let first = write_file(dir.path(), "a.csv", row);
        let second = write_file(dir.path(), "b.csv", row);
        let config = make_config(dir.path(), vec![first, second], 0.5);

        let summary = run(&config).unwrap();
        assert_eq!(summary.auto_labeled, 2);

        let full = loader::load_seed(&config.out_path).unwrap();
        assert_eq!(full[1].id, Some(2));
        assert_eq!(full[2].id, Some(3));
        assert_eq!(full[1].suggested_courses, full[2].suggested_courses);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "mock_courses.csv", CATALOG);
        write_file(dir.path(), "mock_data.csv", SEED);
        let scraped = write_file(
            dir.path(),
            "scraped.csv",
            "title,description,skills\nBI Developer,Builds reports,Python; SQL\n",
        );
        let config = make_config(dir.path(), vec![scraped], 0.5);

        run(&config).unwrap();
        let first = fs::read_to_string(&config.out_path).unwrap();
        run(&config).unwrap();
        let second = fs::read_to_string(&config.out_path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_counts_training_examples() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "mock_courses.csv", CATALOG);
        write_file(dir.path(), "mock_data.csv", SEED);
        let scraped = write_file(
            dir.path(),
            "scraped.csv",
            "title,description,skills\nBI Developer,Builds reports,Python; SQL\n",
        );
        let config = make_config(dir.path(), vec![scraped], 0.5);

        let summary = run(&config).unwrap();
        // seed row + high-confidence auto row, both labeled jobs
        assert_eq!(summary.training_examples, 2);
    }
}
