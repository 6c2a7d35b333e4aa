use std::path::Path;

use crate::attributes::{self, key_to_attr_name};
use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Tag;
use crate::store::XattrStore;
use crate::tag_dict::TagDict;

/// Add tags to the xatag attributes of one file.
///
/// Values equal to the empty sentinel are skipped with a warning; a key
/// with nothing left to add produces no write, so adding is idempotent.
pub fn run<S: XattrStore>(
    store: &mut S,
    path: &Path,
    tags: &[Tag],
    quiet: bool,
) -> Result<CmdResult> {
    let tags = TagDict::from_tags(tags);
    let mut result = CmdResult::default();

    for (key, values) in tags.iter() {
        let mut values_to_add = Vec::new();
        for value in values {
            if value.is_empty() {
                if !quiet {
                    result.add_message(CmdMessage::warning(format!(
                        "tag is missing value: {}",
                        Tag::new(key, value)
                    )));
                }
            } else {
                values_to_add.push(value.clone());
            }
        }
        if values_to_add.is_empty() {
            continue;
        }
        let attr_name = key_to_attr_name(key);
        let current = store.get(path, &attr_name)?.unwrap_or_default();
        let new_field = codec::add_values(&current, &values_to_add);
        store.set(path, &attr_name, &new_field)?;
    }

    result.file_tags.push(crate::model::FileTags {
        path: path.to_path_buf(),
        tags: attributes::read_tag_dict(store, path)?,
    });
    Ok(result)
}
