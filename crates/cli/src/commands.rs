//! Command implementations shared by the record binaries.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;
use roster_core::{Collection, Record};
use roster_storage::{RecordFile, StoreConfig};
use tracing::info;

use crate::table::Tabular;

/// Open the data file at `path`.
pub fn open<R: Record>(path: &Path, config: StoreConfig) -> Result<RecordFile<R>> {
    RecordFile::open_path(path, config)
        .with_context(|| format!("failed to load {}", path.display()))
}

/// Add `record` to the file at `path` and write the file back.
pub fn add<R: Record>(path: &Path, config: StoreConfig, record: R) -> Result<()> {
    let mut file = open::<R>(path, config)?;
    file.add(record);
    file.commit()
        .with_context(|| format!("failed to save {}", path.display()))?;
    info!(kind = R::KIND, count = file.records().len(), "record added");
    Ok(())
}

/// Print the records that pass the display filter.
pub fn display<R: Tabular, W: Write>(records: &Collection<R>, out: &mut W) -> Result<()> {
    let rows: Vec<&R> = records.listed().collect();
    R::write_table(&rows, out)?;
    Ok(())
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
