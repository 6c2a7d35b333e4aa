use crate::commands::{CheckOptions, CmdMessage, CmdResult};
use crate::model::Tag;
use crate::tag_dict::TagDict;

/// Audit user-supplied tags against the known-tags registry.
///
/// Produces warnings for keys and values the registry has not seen, and
/// reports the unseen tags in `CmdResult::new_tags` so the caller can
/// extend the registry when `opts.add` is set. Purely advisory: no file is
/// touched here.
pub fn run(tags: &[Tag], known_tags: Option<&TagDict>, opts: CheckOptions) -> CmdResult {
    let mut result = CmdResult::default();

    let all_tags = TagDict::from_tags(tags);
    // Blank values carry no registry meaning, except as a bare keyed tag
    // with no other values.
    let mut tags = TagDict::new();
    for (key, values) in all_tags.iter() {
        let mut values: Vec<String> = if key.is_empty() {
            values.iter().filter(|v| !v.is_empty()).cloned().collect()
        } else {
            values.clone()
        };
        while values.len() > 1 {
            if let Some(pos) = values.iter().position(|v| v.is_empty()) {
                values.remove(pos);
            } else {
                break;
            }
        }
        if !values.is_empty() {
            tags.insert(key.clone(), values);
        }
    }

    // A missing registry means nothing to compare against, and nothing
    // sensible to extend.
    let add = opts.add && known_tags.is_some();
    let empty = TagDict::new();
    let known = known_tags.unwrap_or(&empty);

    let new_keys: Vec<&String> = tags
        .keys()
        .filter(|k| !k.is_empty() && !known.contains_key(k))
        .collect();
    let new_tags = tags.subtract(known, false);

    if !opts.quiet && !new_tags.is_empty() {
        let prefix = if add { "adding new" } else { "unknown" };
        if !new_keys.is_empty() {
            let key_list = new_keys
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            result.add_message(CmdMessage::warning(format!(
                "{} keys: {}",
                prefix, key_list
            )));
            result.add_message(CmdMessage::info(
                "new keys are not searchable until the index daemon reloads its field list",
            ));
        }
        for (key, values) in new_tags.iter() {
            result.add_message(CmdMessage::warning(format!(
                "{} tags: {}",
                prefix,
                format_tag_line(key, values)
            )));
        }
    }

    if add && !new_tags.is_empty() {
        result.new_tags = Some(new_tags);
    }
    result
}

fn format_tag_line(key: &str, values: &[String]) -> String {
    let joined = values
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    if key.is_empty() {
        joined
    } else if joined.is_empty() {
        format!("{}:", key)
    } else {
        format!("{}:{}", key, joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> TagDict {
        TagDict::from_tags(&[Tag::new("genre", "jazz"), Tag::new("", "favorite")])
    }

    #[test]
    fn known_tags_raise_no_warnings() {
        let result = run(
            &[Tag::new("genre", "jazz")],
            Some(&known()),
            CheckOptions::default(),
        );
        assert!(result.messages.is_empty());
        assert!(result.new_tags.is_none());
    }

    #[test]
    fn unseen_value_under_known_key_warns_tags_only() {
        let result = run(
            &[Tag::new("genre", "blues")],
            Some(&known()),
            CheckOptions::default(),
        );
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("unknown tags: genre:blues")));
        assert!(!result.messages.iter().any(|m| m.content.contains("keys:")));
    }

    #[test]
    fn unseen_key_warns_keys_and_tags() {
        let result = run(
            &[Tag::new("mood", "calm")],
            Some(&known()),
            CheckOptions::default(),
        );
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("unknown keys: mood")));
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("unknown tags: mood:calm")));
    }

    #[test]
    fn add_reports_new_tags_for_the_registry() {
        let result = run(
            &[Tag::new("mood", "calm")],
            Some(&known()),
            CheckOptions {
                add: true,
                quiet: false,
            },
        );
        let new_tags = result.new_tags.unwrap();
        assert_eq!(new_tags.get("mood").unwrap(), &["calm"]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("adding new keys: mood")));
    }

    #[test]
    fn missing_registry_never_extends() {
        let result = run(
            &[Tag::new("mood", "calm")],
            None,
            CheckOptions {
                add: true,
                quiet: false,
            },
        );
        assert!(result.new_tags.is_none());
    }

    #[test]
    fn blank_values_are_ignored_when_others_exist() {
        let result = run(
            &[Tag::new("genre", ""), Tag::new("genre", "jazz")],
            Some(&known()),
            CheckOptions::default(),
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn quiet_suppresses_warnings_but_still_reports_new_tags() {
        let result = run(
            &[Tag::new("mood", "calm")],
            Some(&known()),
            CheckOptions {
                add: true,
                quiet: true,
            },
        );
        assert!(result.messages.is_empty());
        assert!(result.new_tags.is_some());
    }
}
