// Error types
pub mod error;

// Inspector implementations
pub mod json;
pub mod toml;

// Format registry
pub mod registry;

pub use error::{Error, Result};
pub use json::JsonInspector;
pub use registry::{Format, create_inspector, detect_format, load_document};
pub use toml::TomlInspector;

/// Budget for one-line value renderings in child lists.
pub(crate) const REPR_BUDGET: usize = 72;

/// Truncate to `budget` characters, appending `...` when clipped.
pub(crate) fn clip(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(budget.saturating_sub(3)).collect();
        format!("{}...", clipped)
    }
}

/// Cap a preview at `max_lines`, marking the elision.
pub(crate) fn clip_lines(text: &str, max_lines: usize) -> String {
    if max_lines == 0 {
        return String::new();
    }
    let total = text.lines().count();
    if total <= max_lines {
        return text.to_string();
    }
    let mut out: Vec<&str> = text.lines().take(max_lines.saturating_sub(1)).collect();
    out.push("...");
    out.join("\n")
}

/// Split map keys into the visible partition and the underscore-prefixed
/// one, preserving incoming order.
pub(crate) fn partition_keys<'a, I: Iterator<Item = &'a str>>(keys: I) -> (Vec<String>, Vec<String>) {
    let mut keyed = Vec::new();
    let mut private = Vec::new();
    for key in keys {
        if key.starts_with('_') {
            private.push(key.to_string());
        } else {
            keyed.push(key.to_string());
        }
    }
    (keyed, private)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_preserves_short_text() {
        assert_eq!(clip("abc", 10), "abc");
    }

    #[test]
    fn clip_marks_elision() {
        assert_eq!(clip("abcdefghij", 6), "abc...");
    }

    #[test]
    fn clip_lines_caps_and_marks() {
        let text = "a\nb\nc\nd";
        assert_eq!(clip_lines(text, 3), "a\nb\n...");
        assert_eq!(clip_lines(text, 4), text);
    }

    #[test]
    fn clip_lines_zero_budget_is_empty() {
        assert_eq!(clip_lines("a\nb", 0), "");
    }

    #[test]
    fn partition_separates_underscore_keys() {
        let (keyed, private) = partition_keys(["host", "_meta", "port"].into_iter());
        assert_eq!(keyed, vec!["host", "port"]);
        assert_eq!(private, vec!["_meta"]);
    }
}
