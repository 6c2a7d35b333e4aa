use std::path::Path;

use crate::attributes::{self, attr_name_to_key, key_to_attr_name};
use crate::codec;
use crate::commands::{display_key, CmdMessage, CmdResult, DeleteOptions};
use crate::error::Result;
use crate::model::Tag;
use crate::store::XattrStore;
use crate::tag_dict::TagDict;

/// Delete tags from one file.
///
/// A tag whose value is the empty sentinel deletes every value under its
/// key. With `complement`, delete everything *except* the given tags
/// instead.
pub fn run<S: XattrStore>(
    store: &mut S,
    path: &Path,
    tags: &[Tag],
    opts: DeleteOptions,
) -> Result<CmdResult> {
    if opts.complement {
        delete_other(store, path, tags, opts.quiet)
    } else {
        delete_these(store, path, tags, opts.quiet)
    }
}

fn delete_these<S: XattrStore>(
    store: &mut S,
    path: &Path,
    tags: &[Tag],
    quiet: bool,
) -> Result<CmdResult> {
    let tags = TagDict::from_tags(tags);
    let mut result = CmdResult::default();

    for (key, values) in tags.iter() {
        let attr_name = key_to_attr_name(key);
        let Some(current) = store.get(path, &attr_name)? else {
            // absent key: deletion already satisfied
            continue;
        };
        if values.iter().any(|v| v.is_empty()) {
            store.remove(path, &attr_name)?;
            continue;
        }
        let new_field = codec::remove_values(&current, values, false);
        // The guard for when the user says 'key' but means 'key:'.
        if new_field == current && !quiet {
            result.add_message(CmdMessage::warning(format!(
                "{}: tag key unchanged: {}",
                path.display(),
                display_key(key)
            )));
        }
        if new_field.is_empty() {
            if !quiet {
                result.add_message(CmdMessage::warning(format!(
                    "{}: removing empty tag key: {}",
                    path.display(),
                    display_key(key)
                )));
            }
            store.remove(path, &attr_name)?;
        } else {
            store.set(path, &attr_name, &new_field)?;
        }
    }

    Ok(result)
}

fn delete_other<S: XattrStore>(
    store: &mut S,
    path: &Path,
    tags: &[Tag],
    quiet: bool,
) -> Result<CmdResult> {
    let tags = TagDict::from_tags(tags);
    let mut result = CmdResult::default();

    // Walk every owned attribute on the file, not just the mentioned keys.
    for attr_name in attributes::read_attr_names(store, path)? {
        let key = attr_name_to_key(&attr_name);
        let Some(values) = tags.get(&key) else {
            store.remove(path, &attr_name)?;
            continue;
        };
        let current = store.get(path, &attr_name)?.unwrap_or_default();
        let new_field = codec::remove_values(&current, values, true);
        if new_field.is_empty() {
            if !quiet {
                result.add_message(CmdMessage::warning(format!(
                    "{}: removing empty tag key: {}",
                    path.display(),
                    display_key(&key)
                )));
            }
            store.remove(path, &attr_name)?;
        } else {
            store.set(path, &attr_name, &new_field)?;
        }
    }

    Ok(result)
}

/// Remove every owned attribute from `path`. Foreign attributes are left
/// alone.
pub fn delete_all<S: XattrStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    for attr_name in attributes::read_attr_names(store, path)? {
        store.remove(path, &attr_name)?;
    }
    Ok(CmdResult::default())
}
