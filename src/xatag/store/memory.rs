use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::XattrStore;
use crate::error::Result;

/// In-memory attribute tables, one per path. No persistence; used in tests
/// so the engine can run without an xattr-capable filesystem.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, BTreeMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All attributes on one path, for assertions.
    pub fn attrs(&self, path: &Path) -> BTreeMap<String, String> {
        self.files.get(path).cloned().unwrap_or_default()
    }
}

impl XattrStore for InMemoryStore {
    fn list(&self, path: &Path) -> Result<Vec<String>> {
        Ok(self
            .files
            .get(path)
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn get(&self, path: &Path, name: &str) -> Result<Option<String>> {
        Ok(self
            .files
            .get(path)
            .and_then(|table| table.get(name).cloned()))
    }

    fn set(&mut self, path: &Path, name: &str, value: &str) -> Result<()> {
        self.files
            .entry(path.to_path_buf())
            .or_default()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, path: &Path, name: &str) -> Result<()> {
        if let Some(table) = self.files.get_mut(path) {
            table.remove(name);
        }
        Ok(())
    }
}
