use std::path::Path;

use crate::attributes;
use crate::commands::{CmdResult, CopyOptions};
use crate::error::Result;
use crate::store::XattrStore;
use crate::tag_dict::TagDict;

/// Reduce a tag dict by an optional tag filter: `select` normally,
/// `subtract` in complement mode.
pub fn subsetted_tags(source: &TagDict, opts: &CopyOptions) -> TagDict {
    match &opts.filter {
        None => source.clone(),
        Some(filter) => {
            if opts.complement {
                source.subtract(filter, true)
            } else {
                source.select(filter)
            }
        }
    }
}

/// Copy tags onto a destination file.
///
/// The (optionally filtered) source dict is merged with the destination's
/// current tags and the union is set. With `over`, the destination's owned
/// attributes are all removed first, making the copy destructive.
pub fn run<S: XattrStore>(
    store: &mut S,
    source_tags: &TagDict,
    destination: &Path,
    opts: &CopyOptions,
) -> Result<CmdResult> {
    if opts.over {
        super::delete::delete_all(store, destination)?;
    }
    let source_tags = subsetted_tags(source_tags, opts);
    let new_tags = source_tags.merge(&attributes::read_tag_dict(store, destination)?);
    super::set::set_dict(store, destination, &new_tags)?;

    let mut result = CmdResult::default();
    result.file_tags.push(crate::model::FileTags {
        path: destination.to_path_buf(),
        tags: attributes::read_tag_dict(store, destination)?,
    });
    Ok(result)
}
