//! HTML transform for todo list items.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the opening `<li>MARKER ` of a candidate todo item.
static TODO_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<li>([-*] \[[ x]\]) ").unwrap());

const ITEM_OPEN: &str = "<li>";
const ITEM_CLOSE: &str = "</li>";

/// Rewrites checkbox-style list items into todo blocks.
///
/// A list item qualifies when its content starts with `- [ ]`, `- [x]`,
/// `* [ ]` or `* [x]`, then a space and at least one character of text
/// before the item's first `</li>` on the same line. Items are replaced left
/// to right in a single pass, so the output never contains a qualifying item
/// and processing twice gives the same result as processing once.
///
/// # Example
///
/// ```
/// use parsemd_plugins::TodoProcessor;
///
/// let html = TodoProcessor::new().process_html("<li>- [x] Ship it</li>");
/// assert_eq!(
///     html,
///     "<div class=\"todo-item completed\">\n\
///      <input type=\"checkbox\" checked disabled>\n\
///      <span class=\"todo-text\">Ship it</span>\n\
///      </div>"
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TodoProcessor;

impl TodoProcessor {
    /// Create a todo processor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Replace every todo list item in `html` with a todo block.
    ///
    /// Everything else, including malformed markup, passes through unchanged.
    #[must_use]
    pub fn process_html(&self, html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut pos = 0;
        let mut items = 0usize;

        while let Some(caps) = TODO_START_RE.captures_at(html, pos) {
            let Some(start) = caps.get(0) else { break };
            let rest = &html[start.end()..];
            let line = rest.split('\n').next().unwrap_or(rest);

            match line.find(ITEM_CLOSE) {
                Some(len) if len > 0 => {
                    out.push_str(&html[pos..start.start()]);
                    out.push_str(&render_todo(caps[1].contains("[x]"), &line[..len]));
                    pos = start.end() + len + ITEM_CLOSE.len();
                    items += 1;
                }
                // Empty or unclosed item: keep `<li>` and scan on from there.
                _ => {
                    let resume = start.start() + ITEM_OPEN.len();
                    out.push_str(&html[pos..resume]);
                    pos = resume;
                }
            }
        }
        out.push_str(&html[pos..]);

        if items > 0 {
            tracing::debug!(items, "Rewrote todo items");
        }
        out
    }
}

fn render_todo(checked: bool, text: &str) -> String {
    let (class, attr) = if checked {
        (" completed", " checked")
    } else {
        ("", "")
    };
    format!(
        "<div class=\"todo-item{class}\">\n\
         <input type=\"checkbox\"{attr} disabled>\n\
         <span class=\"todo-text\">{text}</span>\n\
         </div>"
    )
}
