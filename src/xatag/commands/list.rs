use std::path::Path;

use crate::attributes;
use crate::commands::{CmdResult, CopyOptions};
use crate::error::Result;
use crate::model::{FileTags, Tag};
use crate::store::XattrStore;
use crate::tag_dict::TagDict;

/// Read one file's tags, optionally reduced by a tag filter (`select`, or
/// `subtract` with `complement`).
pub fn run<S: XattrStore>(
    store: &S,
    path: &Path,
    filter: &[Tag],
    complement: bool,
) -> Result<CmdResult> {
    let mut tags = attributes::read_tag_dict(store, path)?;
    if !filter.is_empty() {
        let opts = CopyOptions {
            filter: Some(TagDict::from_tags(filter)),
            complement,
            over: false,
        };
        tags = super::copy::subsetted_tags(&tags, &opts);
    }

    let mut result = CmdResult::default();
    result.file_tags.push(FileTags {
        path: path.to_path_buf(),
        tags,
    });
    Ok(result)
}
