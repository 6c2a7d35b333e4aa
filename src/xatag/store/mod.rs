//! # Storage Layer
//!
//! The [`XattrStore`] trait abstracts a file's extended-attribute table: a
//! per-file mapping from attribute-name strings to attribute-value strings.
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no xattr-capable filesystem
//!   needed)
//! - Keep the mutation engine **decoupled** from the OS facility
//!
//! ## Implementations
//!
//! - [`fs::FsStore`]: Production storage over the OS extended-attribute
//!   calls (via the `xattr` crate)
//! - [`memory::InMemoryStore`]: In-memory attribute tables for tests
//!
//! Mutators act directly on the backing table; there is no in-process
//! cache, and no cross-attribute atomicity. A multi-attribute operation
//! interrupted mid-way leaves a partial update.

use std::path::Path;

use crate::error::Result;

pub mod fs;
pub mod memory;

/// A file's attribute table, as raw name/value string pairs. Namespace
/// filtering and tag semantics live above this, in `attributes`.
pub trait XattrStore {
    /// All attribute names on `path`.
    fn list(&self, path: &Path) -> Result<Vec<String>>;

    /// The value of one attribute, or `None` if it is absent.
    fn get(&self, path: &Path, name: &str) -> Result<Option<String>>;

    /// Create or overwrite one attribute.
    fn set(&mut self, path: &Path, name: &str, value: &str) -> Result<()>;

    /// Remove one attribute. Removing an absent attribute is
    /// already-satisfied, not an error.
    fn remove(&mut self, path: &Path, name: &str) -> Result<()>;
}
