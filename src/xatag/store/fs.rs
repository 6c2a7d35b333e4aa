use std::io::ErrorKind;
use std::path::Path;

use super::XattrStore;
use crate::error::{Result, XatagError};

/// Production store backed by the OS extended-attribute calls.
///
/// Attribute values are byte strings at the OS level; this store treats
/// them as UTF-8 and replaces invalid sequences on read.
#[derive(Debug, Default)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

fn file_err(path: &Path, source: std::io::Error) -> XatagError {
    XatagError::File {
        path: path.to_path_buf(),
        source,
    }
}

impl XattrStore for FsStore {
    fn list(&self, path: &Path) -> Result<Vec<String>> {
        let names = xattr::list(path).map_err(|e| file_err(path, e))?;
        Ok(names
            .map(|n| n.to_string_lossy().into_owned())
            .collect())
    }

    fn get(&self, path: &Path, name: &str) -> Result<Option<String>> {
        let value = xattr::get(path, name).map_err(|e| file_err(path, e))?;
        Ok(value.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn set(&mut self, path: &Path, name: &str, value: &str) -> Result<()> {
        xattr::set(path, name, value.as_bytes()).map_err(|e| file_err(path, e))
    }

    fn remove(&mut self, path: &Path, name: &str) -> Result<()> {
        match xattr::remove(path, name) {
            Ok(()) => Ok(()),
            // Absent attribute: deletion is already satisfied. The OS
            // reports ENODATA/ENOATTR, which io maps per-platform.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) if e.raw_os_error() == Some(61) || e.raw_os_error() == Some(93) => Ok(()),
            Err(e) => Err(file_err(path, e)),
        }
    }
}
