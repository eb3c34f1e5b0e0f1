//! Plugin trait.

use parsemd_renderer::{HtmlRenderer, MarkdownParser};

/// A processing unit participating in markdown conversion.
///
/// The extension hooks run once, before any document is converted.
/// [`process_html`](Self::process_html) runs once per document on the
/// output of the previous plugin.
///
/// # Thread Safety
///
/// Plugins are `Send + Sync` so a fully assembled [`PluginManager`] can be
/// shared between threads converting different documents.
///
/// [`PluginManager`]: crate::PluginManager
///
/// # Example
///
/// ```
/// use parsemd_plugins::Plugin;
///
/// struct Shout;
///
/// impl Plugin for Shout {
///     fn name(&self) -> &str { "shout" }
///
///     fn process_html(&self, html: &str) -> String {
///         html.to_uppercase()
///     }
/// }
///
/// assert_eq!(Shout.process_html("<p>hi</p>"), "<P>HI</P>");
/// ```
pub trait Plugin: Send + Sync {
    /// Stable, non-empty plugin identifier.
    fn name(&self) -> &str;

    /// Register custom parser extensions.
    ///
    /// Default: no-op.
    fn extend_parser(&self, _parser: &mut MarkdownParser) {}

    /// Register custom renderer extensions.
    ///
    /// Default: no-op.
    fn extend_renderer(&self, _renderer: &mut HtmlRenderer) {}

    /// Transform rendered HTML.
    ///
    /// Must be total: input the plugin does not understand is returned
    /// unchanged.
    fn process_html(&self, html: &str) -> String;
}
