//! CSV inputs — course catalog, seed dataset, scraped job sources.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::catalog::CourseRow;
use crate::models::dataset::{DatasetRow, ScrapedJobRow};

/// Loads the course catalog. A missing file is fatal: without a catalog no
/// job can be labeled, so the run aborts before writing anything.
pub fn load_catalog(path: &Path) -> Result<Vec<CourseRow>, AppError> {
    if !path.exists() {
        return Err(AppError::CatalogMissing(path.to_path_buf()));
    }
    read_rows(path)
}

/// Loads the seed labeled dataset. Required input; a missing file is fatal.
pub fn load_seed(path: &Path) -> Result<Vec<DatasetRow>, AppError> {
    if !path.exists() {
        return Err(AppError::SeedMissing(path.to_path_buf()));
    }
    read_rows(path)
}

/// Loads every scraped source that exists, concatenated in the given
/// order with each source's row order preserved. A missing or unreadable
/// source logs a warning and contributes nothing.
pub fn load_scraped(paths: &[PathBuf]) -> Vec<ScrapedJobRow> {
    let mut jobs = Vec::new();
    for path in paths {
        if !path.exists() {
            warn!(path = %path.display(), "scraped source not found; skipping");
            continue;
        }
        match read_rows::<ScrapedJobRow>(path) {
            Ok(rows) => {
                info!(path = %path.display(), rows = rows.len(), "loaded scraped source");
                jobs.extend(rows);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read scraped source; skipping");
            }
        }
    }
    jobs
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    let csv_err = |source| AppError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(csv_err)?);
    }
    Ok(rows)
}
