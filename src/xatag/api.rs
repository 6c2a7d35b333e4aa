//! # API Facade
//!
//! The single entry point for all xatag operations, a thin layer over the
//! command modules. It dispatches, batches over file lists, and returns
//! structured `CmdResult` values; it never writes to stdout or stderr and
//! never exits the process.
//!
//! ## Batch semantics
//!
//! Every mutating method takes a list of files and isolates failures per
//! file: an I/O error on one file becomes an error-level message plus an
//! entry in `CmdResult::failed_files`, and the batch continues. There is no
//! cross-file transaction and no rollback.
//!
//! ## Generic over XattrStore
//!
//! `XatagApi<S: XattrStore>` works against any attribute-table backend:
//! `FsStore` in production, `InMemoryStore` in tests.

use std::path::{Path, PathBuf};

use crate::attributes;
use crate::commands::{self, CheckOptions, CmdMessage, CmdResult, CopyOptions, DeleteOptions};
use crate::config;
use crate::error::Result;
use crate::model::Tag;
use crate::store::XattrStore;
use crate::tag_dict::TagDict;

pub struct XatagApi<S: XattrStore> {
    store: S,
}

impl<S: XattrStore> XatagApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_tags(&mut self, files: &[PathBuf], tags: &[Tag], quiet: bool) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        for path in files {
            let outcome = commands::add::run(&mut self.store, path, tags, quiet);
            Self::record(&mut result, path, outcome);
        }
        Ok(result)
    }

    pub fn set_tags(&mut self, files: &[PathBuf], tags: &[Tag]) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        for path in files {
            let outcome = commands::set::run(&mut self.store, path, tags);
            Self::record(&mut result, path, outcome);
        }
        Ok(result)
    }

    pub fn set_all_tags(&mut self, files: &[PathBuf], tags: &[Tag]) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        for path in files {
            let outcome = commands::set::run_all(&mut self.store, path, tags);
            Self::record(&mut result, path, outcome);
        }
        Ok(result)
    }

    pub fn delete_tags(
        &mut self,
        files: &[PathBuf],
        tags: &[Tag],
        opts: DeleteOptions,
    ) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        for path in files {
            let outcome = commands::delete::run(&mut self.store, path, tags, opts);
            Self::record(&mut result, path, outcome);
        }
        Ok(result)
    }

    pub fn delete_all_tags(&mut self, files: &[PathBuf]) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        for path in files {
            let outcome = commands::delete::delete_all(&mut self.store, path);
            Self::record(&mut result, path, outcome);
        }
        Ok(result)
    }

    /// Copy the source file's tags onto each destination. Reading the
    /// source is fatal to the whole operation; destination failures are
    /// isolated per file as usual.
    pub fn copy_tags(
        &mut self,
        source: &Path,
        destinations: &[PathBuf],
        opts: &CopyOptions,
    ) -> Result<CmdResult> {
        let source_tags = attributes::read_tag_dict(&self.store, source)?;
        let mut result = CmdResult::default();
        for path in destinations {
            let outcome = commands::copy::run(&mut self.store, &source_tags, path, opts);
            Self::record(&mut result, path, outcome);
        }
        Ok(result)
    }

    pub fn list_tags(
        &self,
        files: &[PathBuf],
        filter: &[Tag],
        complement: bool,
    ) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        for path in files {
            let outcome = commands::list::run(&self.store, path, filter, complement);
            Self::record(&mut result, path, outcome);
        }
        Ok(result)
    }

    /// Audit tags against the known-tags registry under `config_dir`,
    /// extending the registry when `opts.add` is set.
    pub fn check_new_tags(
        &self,
        tags: &[Tag],
        config_dir: &Path,
        opts: CheckOptions,
    ) -> Result<CmdResult> {
        let known = config::load_known_tags(config_dir)?;
        let result = commands::check::run(tags, known.as_ref(), opts);
        if let Some(new_tags) = &result.new_tags {
            config::add_known_tags(config_dir, new_tags)?;
        }
        Ok(result)
    }

    /// The known-tags registry, optionally reduced by a tag filter.
    pub fn known_tags(
        &self,
        config_dir: &Path,
        filter: &[Tag],
        complement: bool,
    ) -> Result<Option<TagDict>> {
        let Some(known) = config::load_known_tags(config_dir)? else {
            return Ok(None);
        };
        if filter.is_empty() {
            return Ok(Some(known));
        }
        let opts = CopyOptions {
            filter: Some(TagDict::from_tags(filter)),
            complement,
            over: false,
        };
        Ok(Some(commands::copy::subsetted_tags(&known, &opts)))
    }

    fn record(result: &mut CmdResult, path: &Path, outcome: Result<CmdResult>) {
        match outcome {
            Ok(r) => result.absorb(r),
            Err(e) => {
                result.add_message(CmdMessage::error(format!("{}: {}", path.display(), e)));
                result.failed_files.push(path.to_path_buf());
            }
        }
    }
}

pub use crate::commands::{MessageLevel, DEFAULT_TAG_KEY};
