use std::path::Path;

use crate::attributes::{self, key_to_attr_name};
use crate::codec;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Tag;
use crate::store::XattrStore;
use crate::tag_dict::TagDict;

/// Replace the stored value set of every key mentioned in `tags`. A key
/// whose value set encodes to nothing has its attribute removed instead of
/// being left with a zero-length value.
pub fn run<S: XattrStore>(store: &mut S, path: &Path, tags: &[Tag]) -> Result<CmdResult> {
    let tags = TagDict::from_tags(tags);
    set_dict(store, path, &tags)?;

    let mut result = CmdResult::default();
    result.file_tags.push(crate::model::FileTags {
        path: path.to_path_buf(),
        tags: attributes::read_tag_dict(store, path)?,
    });
    Ok(result)
}

/// Delete every owned attribute, then set the given keys, so the file's
/// tag state becomes exactly `tags`.
pub fn run_all<S: XattrStore>(store: &mut S, path: &Path, tags: &[Tag]) -> Result<CmdResult> {
    super::delete::delete_all(store, path)?;
    run(store, path, tags)
}

/// The set-keys primitive shared with the copy command.
pub(crate) fn set_dict<S: XattrStore>(store: &mut S, path: &Path, tags: &TagDict) -> Result<()> {
    for (key, values) in tags.iter() {
        let attr_name = key_to_attr_name(key);
        let encoded = codec::encode(values);
        if encoded.is_empty() {
            store.remove(path, &attr_name)?;
        } else {
            store.set(path, &attr_name, &encoded)?;
        }
    }
    Ok(())
}
