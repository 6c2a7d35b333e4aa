use std::path::PathBuf;

use crate::model::FileTags;
use crate::tag_dict::TagDict;

pub mod add;
pub mod check;
pub mod copy;
pub mod delete;
pub mod list;
pub mod set;

/// How an unkeyed tag's key is shown in messages.
pub const DEFAULT_TAG_KEY: &str = "tags";

/// The key as shown to the user; the default category prints as `tags`.
pub fn display_key(key: &str) -> &str {
    if key.is_empty() {
        DEFAULT_TAG_KEY
    } else {
        key
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub file_tags: Vec<FileTags>,
    pub new_tags: Option<TagDict>,
    pub failed_files: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Fold another result into this one (used when batching over files).
    pub fn absorb(&mut self, other: CmdResult) {
        self.file_tags.extend(other.file_tags);
        self.failed_files.extend(other.failed_files);
        self.messages.extend(other.messages);
    }
}

/// Options for [`delete::run`]. Warnings are advisory; `quiet` suppresses
/// them but never the mutation itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteOptions {
    /// Delete everything *except* the given tags.
    pub complement: bool,
    pub quiet: bool,
}

/// Options for [`copy::run`]: an optional tag filter applied to the source
/// dict before merging, via select (or subtract, with `complement`).
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    pub filter: Option<TagDict>,
    pub complement: bool,
    /// Remove all destination tags first (destructive copy).
    pub over: bool,
}

/// Options for [`check::run`], the known-tags audit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Record new tags in the registry instead of only warning.
    pub add: bool,
    pub quiet: bool,
}
