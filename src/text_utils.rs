use std::collections::HashSet;

use serde_json::Value;
use tracing::trace;

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F.
pub fn is_item_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trim [`is_item_space`] characters from both ends.
pub fn trim_item(raw: &str) -> &str {
    raw.trim_matches(is_item_space)
}

/// Collapse every whitespace run into a single space and trim the ends.
///
/// Returns `None` if nothing remains, so callers can drop the candidate.
pub fn clean_item(raw: &str) -> Option<String> {
    let cleaned = raw
        .split(is_item_space)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if cleaned.is_empty() {
        trace!(?raw, "Item empty after cleaning");
        None
    } else {
        Some(cleaned)
    }
}

/// Accumulates cleaned items, keeping only the first occurrence of each.
#[derive(Debug, Default)]
struct ItemSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl ItemSet {
    fn push(&mut self, raw: &str) {
        let Some(item) = clean_item(raw) else {
            return;
        };
        if self.seen.contains(&item) {
            trace!(%item, "Skipping duplicate item");
            return;
        }
        self.seen.insert(item.clone());
        self.items.push(item);
    }

    fn into_items(self) -> Vec<String> {
        self.items
    }
}

/// Normalize a list of candidate strings into a deduplicated set.
///
/// Order follows the first occurrence of each cleaned value. Comparison is
/// exact and case-sensitive, so `"Tent"` and `"tent"` are both kept.
pub fn normalize_items<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = ItemSet::default();
    for item in items {
        set.push(item.as_ref());
    }
    set.into_items()
}

/// Same as [`normalize_items`] but for raw JSON values.
///
/// Anything that is not a JSON string is skipped.
pub fn normalize_values<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut set = ItemSet::default();
    for value in values {
        match value.as_str() {
            Some(text) => set.push(text),
            None => trace!(?value, "Skipping non-string item"),
        }
    }
    set.into_items()
}
