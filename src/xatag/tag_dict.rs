//! Pure set algebra over tag dictionaries.
//!
//! A [`TagDict`] maps each tag key to its distinct values. An empty value
//! collection for a key, or a collection containing the empty string, acts
//! as a wildcard ("all values under this key") in delete and select
//! contexts. Callers distinguish "key absent" (not mentioned) from "key
//! present with a wildcard value set".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Tag;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagDict(BTreeMap<String, Vec<String>>);

/// A value set containing the empty sentinel, or containing nothing at all,
/// matches every value under its key.
fn is_wildcard(values: &[String]) -> bool {
    values.is_empty() || values.iter().any(|v| v.is_empty())
}

impl TagDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group a flat tag list by key. Values stay unique and keep their
    /// first-seen order; empty values are kept, since they carry wildcard
    /// meaning for delete and select.
    pub fn from_tags(tags: &[Tag]) -> Self {
        let mut dict = Self::new();
        for tag in tags {
            let values = dict.0.entry(tag.key.clone()).or_default();
            if !values.contains(&tag.value) {
                values.push(tag.value.clone());
            }
        }
        dict
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Vec<String>> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: String, values: Vec<String>) {
        self.0.insert(key, values);
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.0.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    /// Union of keys; for keys in both, union of values. Values from `self`
    /// come first, then unseen values from `other`.
    pub fn merge(&self, other: &TagDict) -> TagDict {
        let mut result = self.clone();
        for (key, values) in other.iter() {
            let entry = result.0.entry(key.clone()).or_default();
            for value in values {
                if !entry.contains(value) {
                    entry.push(value.clone());
                }
            }
        }
        result
    }

    /// Remove `other`'s values from each of `self`'s keys.
    ///
    /// With `empty_means_all`, a wildcard value set in `other` removes the
    /// whole key; without it, a wildcard removes nothing for that key (the
    /// mode used when diffing against the known-tags registry). Keys whose
    /// value set empties out are dropped entirely.
    pub fn subtract(&self, other: &TagDict, empty_means_all: bool) -> TagDict {
        let mut result = TagDict::new();
        for (key, values) in self.iter() {
            match other.get(key) {
                None => {
                    result.insert(key.clone(), values.clone());
                }
                Some(removals) => {
                    if is_wildcard(removals) {
                        if !empty_means_all {
                            result.insert(key.clone(), values.clone());
                        }
                        continue;
                    }
                    let kept: Vec<String> = values
                        .iter()
                        .filter(|v| !removals.contains(v))
                        .cloned()
                        .collect();
                    if !kept.is_empty() {
                        result.insert(key.clone(), kept);
                    }
                }
            }
        }
        result
    }

    /// Keep only the keys present in `other`; for keys in both, intersect
    /// values. A wildcard value set in `other` keeps all values for that
    /// key. Keys whose intersection is empty are dropped.
    pub fn select(&self, other: &TagDict) -> TagDict {
        let mut result = TagDict::new();
        for (key, values) in self.iter() {
            let Some(wanted) = other.get(key) else {
                continue;
            };
            let kept: Vec<String> = if is_wildcard(wanted) {
                values.clone()
            } else {
                values
                    .iter()
                    .filter(|v| wanted.contains(v))
                    .cloned()
                    .collect()
            };
            if !kept.is_empty() {
                result.insert(key.clone(), kept);
            }
        }
        result
    }
}

impl FromIterator<(String, Vec<String>)> for TagDict {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: &[(&str, &[&str])]) -> TagDict {
        entries
            .iter()
            .map(|(k, vs)| {
                (
                    k.to_string(),
                    vs.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    #[test]
    fn from_tags_groups_by_key() {
        let tags = vec![
            Tag::new("genre", "jazz"),
            Tag::new("genre", "blues"),
            Tag::new("genre", "jazz"),
            Tag::new("", "favorite"),
        ];
        let d = TagDict::from_tags(&tags);
        assert_eq!(d.get("genre").unwrap(), &["jazz", "blues"]);
        assert_eq!(d.get("").unwrap(), &["favorite"]);
    }

    #[test]
    fn merge_unions_keys_and_values() {
        let a = dict(&[("genre", &["jazz"]), ("mood", &["calm"])]);
        let b = dict(&[("genre", &["blues", "jazz"]), ("year", &["1959"])]);
        let merged = a.merge(&b);
        assert_eq!(merged.get("genre").unwrap(), &["jazz", "blues"]);
        assert_eq!(merged.get("mood").unwrap(), &["calm"]);
        assert_eq!(merged.get("year").unwrap(), &["1959"]);
    }

    #[test]
    fn subtract_removes_values() {
        let a = dict(&[("genre", &["blues", "jazz"])]);
        let b = dict(&[("genre", &["jazz"])]);
        let result = a.subtract(&b, true);
        assert_eq!(result.get("genre").unwrap(), &["blues"]);
    }

    #[test]
    fn subtract_drops_emptied_keys() {
        let a = dict(&[("genre", &["jazz"])]);
        let b = dict(&[("genre", &["jazz"])]);
        assert!(a.subtract(&b, true).is_empty());
    }

    #[test]
    fn subtract_wildcard_removes_whole_key() {
        let a = dict(&[("genre", &["blues", "jazz"]), ("mood", &["calm"])]);
        let b = dict(&[("genre", &[""])]);
        let result = a.subtract(&b, true);
        assert!(!result.contains_key("genre"));
        assert!(result.contains_key("mood"));
    }

    #[test]
    fn subtract_wildcard_is_inert_without_empty_means_all() {
        let a = dict(&[("genre", &["blues", "jazz"])]);
        let b = dict(&[("genre", &[""])]);
        let result = a.subtract(&b, false);
        assert_eq!(result.get("genre").unwrap(), &["blues", "jazz"]);
    }

    #[test]
    fn select_intersects() {
        let a = dict(&[("genre", &["blues", "jazz"]), ("mood", &["calm"])]);
        let b = dict(&[("genre", &["jazz", "funk"])]);
        let result = a.select(&b);
        assert_eq!(result.get("genre").unwrap(), &["jazz"]);
        assert!(!result.contains_key("mood"));
    }

    #[test]
    fn select_wildcard_keeps_all_values() {
        let a = dict(&[("genre", &["blues", "jazz"])]);
        let b = dict(&[("genre", &[""])]);
        let result = a.select(&b);
        assert_eq!(result.get("genre").unwrap(), &["blues", "jazz"]);
    }

    #[test]
    fn select_and_subtract_partition_recovers_original() {
        let d = dict(&[
            ("genre", &["blues", "jazz", "swing"]),
            ("mood", &["calm", "loud"]),
            ("year", &["1959"]),
        ]);
        let b = dict(&[("genre", &["jazz"]), ("mood", &[""])]);
        let recovered = d.select(&b).merge(&d.subtract(&b, true));
        // value order is irrelevant; compare as sorted sets
        let canon = |d: &TagDict| -> TagDict {
            d.iter()
                .map(|(k, vs)| {
                    let mut vs = vs.clone();
                    vs.sort();
                    (k.clone(), vs)
                })
                .collect()
        };
        assert_eq!(canon(&recovered), canon(&d));
    }
}
