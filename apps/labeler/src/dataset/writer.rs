//! Atomic CSV output.

use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::AppError;
use crate::models::dataset::{DatasetRow, DATASET_HEADERS};

/// Writes rows as CSV through a temp file in the destination directory,
/// then persists it over `path`. Either the complete output exists or the
/// previous state is untouched — a failed run never leaves partial output.
pub fn write_dataset(path: &Path, rows: &[DatasetRow]) -> Result<(), AppError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;

    let csv_err = |source| AppError::Csv {
        path: path.to_path_buf(),
        source,
    };
    {
        let mut writer = csv::Writer::from_writer(tmp.as_file());
        if rows.is_empty() {
            writer.write_record(DATASET_HEADERS).map_err(csv_err)?;
        }
        for row in rows {
            writer.serialize(row).map_err(csv_err)?;
        }
        writer.flush()?;
    }

    tmp.persist(path).map_err(|e| AppError::Io(e.error))?;
    Ok(())
}
