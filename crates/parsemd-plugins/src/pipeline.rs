//! Default conversion pipeline.

use parsemd_renderer::ConvertError;

use crate::{PluginManager, TodoPlugin};

/// Convert markdown to HTML with the default plugin set.
///
/// Builds a fresh [`PluginManager`] with the [`TodoPlugin`], renders the
/// document as plain `CommonMark` and post-processes the result.
///
/// # Errors
///
/// Returns [`ConvertError`] if the renderer rejects the input.
///
/// # Example
///
/// ```
/// let html = parsemd_plugins::convert(b"- \\- [ ] Write docs").unwrap();
/// assert!(html.contains(r#"<span class="todo-text">Write docs</span>"#));
/// ```
pub fn convert(source: &[u8]) -> Result<String, ConvertError> {
    let manager = PluginManager::new().with_plugin(TodoPlugin);
    let markdown = manager.create_markdown();
    manager.convert(&markdown, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_plain_document() {
        let html = convert(b"# Notes\n\nNothing to do.").unwrap();
        assert_eq!(html, "<h1>Notes</h1>\n<p>Nothing to do.</p>\n");
    }

    #[test]
    fn test_convert_rejects_invalid_utf8() {
        assert!(convert(b"\xfe\xff").is_err());
    }
}
