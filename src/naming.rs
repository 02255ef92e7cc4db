//! Label formatting for the `NN-kebab-name` key convention.
//!
//! Category directories and page files share one naming pattern: an optional
//! numeric ordering prefix (`NN-`) followed by a kebab-case name. The prefix
//! only controls sort order; it never shows up in labels or display paths.
//!
//! - `01-getting-started` → order `Some(1)`, label "Getting Started"
//! - `installation` → order `None`, label "Installation"

/// A key split into its ordering prefix and display-relevant remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedKey<'a> {
    /// Number prefix if present (`7` from `07-colors`).
    pub order: Option<u32>,
    /// The key with the prefix removed. The full input when unprefixed.
    pub name: &'a str,
}

/// Split a key into its ordering prefix and name.
///
/// A prefix is one or more ASCII digits followed by a dash *and* at least one
/// more character. `"01-"` and `"2024"` are treated as plain names.
pub fn split_order_prefix(key: &str) -> OrderedKey<'_> {
    if let Some((prefix, rest)) = key.split_once('-') {
        if !prefix.is_empty() && !rest.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(order) = prefix.parse::<u32>() {
                return OrderedKey {
                    order: Some(order),
                    name: rest,
                };
            }
        }
    }
    OrderedKey {
        order: None,
        name: key,
    }
}

/// Strip a leading `NN-` ordering token. Returns the input unchanged when
/// there is no prefix.
pub fn remove_order_prefix(key: &str) -> &str {
    split_order_prefix(key).name
}

/// Convert `kebab-case` to `Title Case`.
///
/// Only the first character of each segment is upper-cased; the rest is kept
/// as written, so `api-v2-ID` becomes "Api V2 ID". Empty segments from
/// leading, trailing or doubled dashes are dropped.
pub fn kebab_to_title_case(key: &str) -> String {
    key.split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable label for a category or slug key.
pub fn display_label(key: &str) -> String {
    kebab_to_title_case(remove_order_prefix(key))
}
