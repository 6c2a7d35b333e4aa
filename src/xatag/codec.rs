//! Encoding and decoding of a single attribute slot.
//!
//! One extended attribute holds every value for one tag key, joined by
//! [`FIELD_SEPARATOR`]. Values are normalized, deduplicated, and written in
//! sorted order so the stored form is deterministic. Decoding tolerates
//! sloppy input: adjacent separators produce empty tokens, which are dropped.

/// Separator between values inside one attribute string.
pub const FIELD_SEPARATOR: char = ';';

/// Normalization shared by keys and values: the separator and control
/// characters become spaces, then leading/trailing whitespace is trimmed.
/// Idempotent, and the empty string is a valid result.
fn clean(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| {
            if c == FIELD_SEPARATOR || c.is_control() {
                ' '
            } else {
                c
            }
        })
        .collect();
    replaced.trim().to_string()
}

pub fn format_key(raw: &str) -> String {
    clean(raw)
}

pub fn format_value(raw: &str) -> String {
    clean(raw)
}

/// Split an attribute string into its tag values, dropping empty tokens.
pub fn decode(encoded: &str) -> Vec<String> {
    encoded
        .split(FIELD_SEPARATOR)
        .map(format_value)
        .filter(|v| !v.is_empty())
        .collect()
}

/// Join tag values into an attribute string: normalized, deduplicated,
/// sorted. The empty set encodes to the empty string; callers must then
/// remove the attribute rather than store a zero-length value.
pub fn encode<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut formatted: Vec<String> = values
        .into_iter()
        .map(|v| format_value(v.as_ref()))
        .filter(|v| !v.is_empty())
        .collect();
    formatted.sort();
    formatted.dedup();
    formatted.join(&FIELD_SEPARATOR.to_string())
}

/// Add values to an encoded attribute string, skipping ones already present.
pub fn add_values(encoded: &str, values_to_add: &[String]) -> String {
    let mut values = decode(encoded);
    for value in values_to_add {
        let value = format_value(value);
        if !value.is_empty() && !values.contains(&value) {
            values.push(value);
        }
    }
    encode(values)
}

/// Remove values from an encoded attribute string.
///
/// With `complement` set, keep only the listed values instead. An empty
/// string among `values_to_remove` means "match all" there, so complement
/// mode keeps everything.
pub fn remove_values(encoded: &str, values_to_remove: &[String], complement: bool) -> String {
    let current = decode(encoded);
    let targets: Vec<String> = values_to_remove.iter().map(|v| format_value(v)).collect();
    let kept: Vec<String> = if complement {
        if targets.iter().any(|v| v.is_empty()) {
            current
        } else {
            current.into_iter().filter(|v| targets.contains(v)).collect()
        }
    } else {
        current
            .into_iter()
            .filter(|v| !targets.contains(v))
            .collect()
    };
    encode(kept)
}
