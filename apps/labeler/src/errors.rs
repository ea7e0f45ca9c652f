#![allow(dead_code)]

use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// Per-row anomalies never surface here — components degrade or drop the
/// row locally. Only resource-level failures abort the run, before any
/// output is written.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("course catalog not found: {}", .0.display())]
    CatalogMissing(PathBuf),

    #[error("seed dataset not found: {}", .0.display())]
    SeedMissing(PathBuf),

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
