//! Persistence layer
//!
//! Reads and writes the inventory as a two-column CSV table. Every
//! save is a full-file rewrite; there is no append or partial-update
//! mode. A missing file is an empty fridge, not an error.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::items::Item;

/// Column headers of the persisted table.
/// Must match the serde renames on [`Item`].
const HEADERS: [&str; 2] = ["Item", "Date Added"];

/// Storage failures surfaced to the caller
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed inventory file: {0}")]
    Malformed(#[from] csv::Error),
}

/// The durable persistence boundary for the item table
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole table. A missing file yields an empty inventory.
    pub fn load(&self) -> Result<Vec<Item>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut items = Vec::new();
        for row in reader.deserialize() {
            items.push(row?);
        }

        log::debug!("Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    /// Rewrite the whole table. The header row is written even when
    /// the inventory is empty.
    pub fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(HEADERS)?;
        for item in items {
            writer.serialize(item)?;
        }
        writer.flush()?;

        log::debug!("Saved {} items to {}", items.len(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(default_data_path())
    }
}

/// Where the inventory file lives by default
pub fn default_data_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "fridgekeep", "Fridgekeep") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("fridge_data.csv");
        path
    } else {
        // Fallback to current directory
        PathBuf::from("./fridge_data.csv")
    }
}
