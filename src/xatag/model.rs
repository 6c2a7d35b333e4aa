use std::fmt;
use std::path::PathBuf;

use crate::codec::{format_key, format_value};
use crate::tag_dict::TagDict;

/// A single key/value tag. The empty key is the default, unkeyed category;
/// the empty value is a sentinel meaning "no value" on add and "all values"
/// in delete/select contexts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    /// Create a tag, normalizing both parts.
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: format_key(key),
            value: format_value(value),
        }
    }

    /// Parse a user-supplied tag spec.
    ///
    /// `key:value` is a keyed tag, `key:` is a key with the wildcard/empty
    /// value, and a bare `value` belongs to the default unkeyed category.
    pub fn from_spec(spec: &str) -> Self {
        match spec.split_once(':') {
            Some((key, value)) => Tag::new(key, value),
            None => Tag::new("", spec),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{}:{}", self.key, self.value)
        }
    }
}

/// Parse a list of tag specs as given on the command line.
pub fn parse_tag_specs<S: AsRef<str>>(specs: &[S]) -> Vec<Tag> {
    specs.iter().map(|s| Tag::from_spec(s.as_ref())).collect()
}

/// The tags read from one file, for listing and copying.
#[derive(Debug, Clone)]
pub struct FileTags {
    pub path: PathBuf,
    pub tags: TagDict,
}
