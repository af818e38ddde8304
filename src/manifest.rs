use crate::config::{FORMAT_VERSION, MANIFEST_FILE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One published table and how many rows it carries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub name: String,
    pub rows: u64,
}

/// Versioned record of the tables written to an output directory.
///
/// Entries are sorted by table name at write time so repeated runs over the
/// same data produce byte-identical manifests.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Manifest {
    pub version: u32,
    pub tables: Vec<TableEntry>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

pub fn manifest_path(output_dir: &Path) -> PathBuf {
    output_dir.join(MANIFEST_FILE)
}

impl Manifest {
    pub fn new() -> Self {
        Self {
            version: FORMAT_VERSION,
            tables: Vec::new(),
        }
    }

    pub fn record(&mut self, name: impl Into<String>, rows: u64) {
        self.tables.push(TableEntry {
            name: name.into(),
            rows,
        });
    }

    /// Writes the manifest atomically via rename, entries sorted by name.
    pub fn write(&self, output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

        let mut sorted = self.clone();
        sorted.tables.sort_by(|a, b| a.name.cmp(&b.name));

        let path = manifest_path(output_dir);
        let tmp_path = path.with_extension("json.tmp");
        let file = File::create(&tmp_path)
            .with_context(|| format!("Failed to create temp manifest file: {:?}", tmp_path))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, &sorted)
            .context("Failed to serialize manifest")?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush manifest: {:?}", tmp_path))?;
        drop(writer);

        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to rename temp manifest to: {:?}", path))?;

        info!(tables = sorted.tables.len(), path = ?path, "Manifest written");

        Ok(())
    }

    /// Returns `Ok(Some(manifest))` if present and readable at the current
    /// format version, `Ok(None)` if missing, corrupt, or version-mismatched.
    pub fn load(output_dir: &Path) -> Result<Option<Manifest>> {
        let path = manifest_path(output_dir);

        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path)
            .with_context(|| format!("Failed to open manifest file: {:?}", path))?;
        let reader = BufReader::new(file);

        let manifest: Manifest = match serde_json::from_reader(reader) {
            Ok(m) => m,
            Err(e) => {
                warn!(error = %e, "Manifest file is corrupt or unreadable");
                return Ok(None);
            }
        };

        if manifest.version != FORMAT_VERSION {
            info!(
                stored = manifest.version,
                current = FORMAT_VERSION,
                "Manifest version mismatch"
            );
            return Ok(None);
        }

        Ok(Some(manifest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn manifest_path_returns_correct_path() {
        let path = manifest_path(Path::new("/output/dir"));
        assert_eq!(path, PathBuf::from("/output/dir/manifest.json"));
    }

    #[test]
    fn load_returns_none_when_missing() {
        let dir = TempDir::new().unwrap();
        let result = Manifest::load(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn write_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();

        let mut manifest = Manifest::new();
        manifest.record("enchantment_rarity.txt", 40);
        manifest.record("enchantment_cost.txt", 120);
        manifest.write(dir.path()).unwrap();

        let loaded = Manifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded.version, FORMAT_VERSION);
        assert_eq!(loaded.tables.len(), 2);
        // Entries come back sorted by name.
        assert_eq!(loaded.tables[0].name, "enchantment_cost.txt");
        assert_eq!(loaded.tables[0].rows, 120);
        assert_eq!(loaded.tables[1].name, "enchantment_rarity.txt");
    }

    #[test]
    fn corrupt_manifest_returns_none() {
        let dir = TempDir::new().unwrap();
        let mut file = File::create(manifest_path(dir.path())).unwrap();
        file.write_all(b"not valid json").unwrap();

        let result = Manifest::load(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn version_mismatch_returns_none() {
        let dir = TempDir::new().unwrap();

        let stale = Manifest {
            version: FORMAT_VERSION + 1,
            tables: Vec::new(),
        };
        let json = serde_json::to_string(&stale).unwrap();
        fs::write(manifest_path(dir.path()), json).unwrap();

        let result = Manifest::load(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn repeated_writes_are_byte_identical() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();

        let mut first = Manifest::new();
        first.record("b.txt", 2);
        first.record("a.txt", 1);
        first.write(dir_a.path()).unwrap();

        let mut second = Manifest::new();
        second.record("a.txt", 1);
        second.record("b.txt", 2);
        second.write(dir_b.path()).unwrap();

        let a = fs::read(manifest_path(dir_a.path())).unwrap();
        let b = fs::read(manifest_path(dir_b.path())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn no_tmp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        Manifest::new().write(dir.path()).unwrap();

        assert!(manifest_path(dir.path()).exists());
        assert!(!dir.path().join("manifest.json.tmp").exists());
    }
}
