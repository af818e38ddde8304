//! Atomic table writer for datasets.
//!
//! Format (version 1, frozen): RFC 4180 CSV, no header row, one record per
//! key with the key as the first field. Scalar datasets write exactly two
//! fields; list datasets one field per element after the key; pair datasets
//! two fields per pair, flattened in (A, B)-sorted order. Fields containing
//! the delimiter, quotes, or newlines are quoted by the writer, so every
//! value round-trips through any RFC 4180 reader.
//!
//! Tables are staged to a `.tmp` sibling and renamed into place, so a failure
//! mid-write never corrupts a previously published table.

use crate::dataset::Dataset;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes `dataset` to `dir/file_name`, one sorted record per key, creating
/// or overwriting the file. Returns the number of rows written.
pub fn write_table(dataset: &dyn Dataset, dir: &Path, file_name: &str) -> Result<u64> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    let path = dir.join(file_name);
    let tmp_path = tmp_table_path(&path, file_name);

    let file = File::create(&tmp_path)
        .with_context(|| format!("Failed to create temp table file: {:?}", tmp_path))?;
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(BufWriter::with_capacity(128 * 1024, file));

    let mut rows = 0u64;
    for record in dataset.records() {
        writer
            .write_record(&record)
            .with_context(|| format!("Failed to write record to: {:?}", tmp_path))?;
        rows += 1;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush table: {:?}", tmp_path))?;
    drop(writer);

    fs::rename(&tmp_path, &path)
        .with_context(|| format!("Failed to rename temp table to: {:?}", path))?;

    info!(rows = rows, path = ?path, "Table written");

    Ok(rows)
}

fn tmp_table_path(path: &Path, file_name: &str) -> PathBuf {
    path.with_file_name(format!("{}.tmp", file_name))
}
