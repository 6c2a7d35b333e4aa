//! Mapping between tag keys and namespaced attribute names, plus the thin
//! read accessors the mutation engine shares.
//!
//! Attributes are written under the canonical `user.org.xatag.tags` name;
//! on read, names both with and without the `user.` vendor prefix are
//! recognized as ours. The bare prefix (no key suffix) holds the default
//! unkeyed tag category, and the key spelled `tags` is an alias for it.

use std::path::Path;

use crate::codec::{self, format_key};
use crate::error::Result;
use crate::store::XattrStore;
use crate::tag_dict::TagDict;

pub const XATAG_PREFIX: &str = "org.xatag.tags";
pub const USER_XATAG_PREFIX: &str = "user.org.xatag.tags";

/// True if `name` falls under the xatag namespace, in either prefix form.
pub fn is_xatag_attr(name: &str) -> bool {
    name.starts_with(USER_XATAG_PREFIX) || name.starts_with(XATAG_PREFIX)
}

/// The canonical attribute name for a tag key.
pub fn key_to_attr_name(key: &str) -> String {
    let key = format_key(key);
    if key.is_empty() || key == "tags" {
        USER_XATAG_PREFIX.to_string()
    } else {
        format!("{}.{}", USER_XATAG_PREFIX, key)
    }
}

/// The tag key an owned attribute name refers to. Inverse of
/// [`key_to_attr_name`] for canonical keys.
pub fn attr_name_to_key(name: &str) -> String {
    let rest = name
        .strip_prefix(USER_XATAG_PREFIX)
        .or_else(|| name.strip_prefix(XATAG_PREFIX))
        .unwrap_or(name);
    format_key(rest.strip_prefix('.').unwrap_or(rest))
}

/// The tag keys present on `path`, in attribute-table order.
pub fn read_tag_keys<S: XattrStore>(store: &S, path: &Path) -> Result<Vec<String>> {
    Ok(store
        .list(path)?
        .iter()
        .filter(|name| is_xatag_attr(name))
        .map(|name| attr_name_to_key(name))
        .collect())
}

/// All owned attribute names present on `path`.
pub fn read_attr_names<S: XattrStore>(store: &S, path: &Path) -> Result<Vec<String>> {
    Ok(store
        .list(path)?
        .into_iter()
        .filter(|name| is_xatag_attr(name))
        .collect())
}

/// Decode every owned attribute on `path` into a tag dict.
pub fn read_tag_dict<S: XattrStore>(store: &S, path: &Path) -> Result<TagDict> {
    let mut dict = TagDict::new();
    for name in read_attr_names(store, path)? {
        if let Some(encoded) = store.get(path, &name)? {
            let values = codec::decode(&encoded);
            if !values.is_empty() {
                dict.insert(attr_name_to_key(&name), values);
            }
        }
    }
    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    #[test]
    fn recognizes_both_prefix_forms() {
        assert!(is_xatag_attr("user.org.xatag.tags"));
        assert!(is_xatag_attr("user.org.xatag.tags.genre"));
        assert!(is_xatag_attr("org.xatag.tags.genre"));
        assert!(!is_xatag_attr("user.mime_type"));
        assert!(!is_xatag_attr("security.selinux"));
    }

    #[test]
    fn default_key_maps_to_bare_prefix() {
        assert_eq!(key_to_attr_name(""), "user.org.xatag.tags");
        assert_eq!(key_to_attr_name("tags"), "user.org.xatag.tags");
        assert_eq!(attr_name_to_key("user.org.xatag.tags"), "");
        assert_eq!(attr_name_to_key("org.xatag.tags"), "");
    }

    #[test]
    fn keyed_names_roundtrip() {
        for key in ["genre", "sub.genre", "a key"] {
            assert_eq!(attr_name_to_key(&key_to_attr_name(key)), key);
        }
    }

    #[test]
    fn legacy_prefix_decodes_to_same_key() {
        assert_eq!(attr_name_to_key("org.xatag.tags.genre"), "genre");
        assert_eq!(attr_name_to_key("user.org.xatag.tags.genre"), "genre");
    }

    #[test]
    fn read_tag_dict_filters_foreign_attrs() {
        let mut store = InMemoryStore::new();
        let path = PathBuf::from("song.mp3");
        store
            .set(&path, "user.org.xatag.tags.genre", "blues;jazz")
            .unwrap();
        store.set(&path, "user.org.xatag.tags", "favorite").unwrap();
        store.set(&path, "user.mime_type", "audio/mpeg").unwrap();

        let dict = read_tag_dict(&store, &path).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("genre").unwrap(), &["blues", "jazz"]);
        assert_eq!(dict.get("").unwrap(), &["favorite"]);
    }
}
