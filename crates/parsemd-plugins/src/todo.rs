//! Todo plugin and todo item recognizers.
//!
//! The recognizers work on raw list item text such as `"- [x] Ship it"`,
//! independently of the HTML transform in [`TodoProcessor`].

use crate::{Plugin, TodoProcessor};

/// Markers that start a todo item, in matching order.
pub const TODO_MARKERS: [&str; 4] = ["- [ ]", "- [x]", "* [ ]", "* [x]"];

/// Plugin rewriting checkbox-style list items into todo blocks.
///
/// Parser and renderer hooks are left as no-ops; all work happens in
/// [`Plugin::process_html`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TodoPlugin;

impl TodoPlugin {
    /// Create a todo plugin.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for TodoPlugin {
    fn name(&self) -> &'static str {
        "todo"
    }

    fn process_html(&self, html: &str) -> String {
        TodoProcessor::new().process_html(html)
    }
}

/// Check whether `text` starts with a todo marker.
///
/// Surrounding whitespace is ignored. The check is case-sensitive: `[X]`
/// does not count.
///
/// ```
/// use parsemd_plugins::is_todo_item;
///
/// assert!(is_todo_item("  - [ ] Write tests"));
/// assert!(!is_todo_item("- [X] Shouting"));
/// ```
#[must_use]
pub fn is_todo_item(text: &str) -> bool {
    let trimmed = text.trim();
    TODO_MARKERS
        .iter()
        .any(|marker| trimmed.starts_with(*marker))
}

/// Check whether `text` contains a checked box anywhere.
///
/// Looser than [`is_todo_item`]: accepts `[x]` or `[X]` at any position,
/// so `"note [x] done"` counts as checked without being a todo item.
#[must_use]
pub fn is_todo_item_checked(text: &str) -> bool {
    text.contains("[x]") || text.contains("[X]")
}

/// Strip the todo marker and surrounding whitespace from `text`.
///
/// At most one marker is removed. Text without a marker is only trimmed.
#[must_use]
pub fn extract_todo_text(text: &str) -> &str {
    let trimmed = text.trim();
    TODO_MARKERS
        .iter()
        .find_map(|marker| trimmed.strip_prefix(*marker))
        .unwrap_or(trimmed)
        .trim()
}
