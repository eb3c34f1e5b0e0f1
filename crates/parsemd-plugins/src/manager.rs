//! Ordered plugin registry.

use std::fmt;

use parsemd_renderer::{ConvertError, Markdown};

use crate::Plugin;

/// Ordered collection of plugins.
///
/// Registration order is execution order. Plugins are never removed and
/// duplicate names are allowed; every registered plugin runs.
#[derive(Default)]
pub struct PluginManager {
    plugins: Vec<Box<dyn Plugin>>,
}

impl fmt::Debug for PluginManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.plugins.iter().map(|p| p.name()))
            .finish()
    }
}

impl PluginManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plugin.
    pub fn register<P: Plugin + 'static>(&mut self, plugin: P) {
        tracing::debug!(plugin = plugin.name(), "Registered plugin");
        self.plugins.push(Box::new(plugin));
    }

    /// Append a plugin, builder style.
    #[must_use]
    pub fn with_plugin<P: Plugin + 'static>(mut self, plugin: P) -> Self {
        self.register(plugin);
        self
    }

    /// Registered plugins in registration order.
    #[must_use]
    pub fn plugins(&self) -> &[Box<dyn Plugin>] {
        &self.plugins
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if no plugins are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Let every plugin extend the parser, then the renderer, in order.
    pub fn extend(&self, markdown: &mut Markdown) {
        for plugin in &self.plugins {
            plugin.extend_parser(markdown.parser_mut());
            plugin.extend_renderer(markdown.renderer_mut());
        }
    }

    /// Create a plain `CommonMark` converter extended by every plugin.
    #[must_use]
    pub fn create_markdown(&self) -> Markdown {
        let mut markdown = Markdown::new();
        self.extend(&mut markdown);
        markdown
    }

    /// Run HTML through every plugin in registration order.
    ///
    /// Each plugin receives the previous plugin's output.
    #[must_use]
    pub fn process_html(&self, html: &str) -> String {
        let mut result = html.to_owned();
        for plugin in &self.plugins {
            tracing::trace!(plugin = plugin.name(), "Processing HTML");
            result = plugin.process_html(&result);
        }
        result
    }

    /// Convert markdown with `markdown`, then post-process the HTML.
    ///
    /// `markdown` is expected to have been passed through
    /// [`extend`](Self::extend) already.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error unchanged.
    pub fn convert(&self, markdown: &Markdown, source: &[u8]) -> Result<String, ConvertError> {
        let html = markdown.convert(source)?;
        Ok(self.process_html(&html))
    }
}
