//! CSV persistence for assembled submission tables.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes the assembled rows to `path` as one CSV with a header row,
/// creating parent directories as needed. The file is replaced whole, so a
/// rerun for the same date overwrites the previous submission.
pub fn write_table<R: Serialize>(path: &str, rows: &[R]) -> Result<()> {
    let path = Path::new(path);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    debug!(path = %path.display(), rows = rows.len(), "writing CSV");

    let mut writer = WriterBuilder::new().from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
