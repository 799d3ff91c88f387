use super::DataStore;
use crate::error::{Result, StockError};
use crate::model::Item;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> std::io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_INVENTORY_FILE.to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Item>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StockError::Load(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let items: Vec<Item> = serde_json::from_str(&content).map_err(|e| {
            StockError::Load(format!("cannot parse {}: {}", self.path.display(), e))
        })?;
        Ok(Some(items))
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        let persist_err =
            |e: std::io::Error| StockError::Persistence(format!("{}: {}", self.path.display(), e));

        let content = serde_json::to_string_pretty(items)
            .map_err(|e| StockError::Persistence(format!("{}: {}", self.path.display(), e)))?;

        self.ensure_parent_dir().map_err(persist_err)?;

        // Write next to the target and rename over it
        let tmp_file = self.tmp_path();
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(persist_err(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(persist_err(e));
        }

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
