//! Renderer extension point.

use std::fmt;

use pulldown_cmark::Event;

/// Event filter applied to every parsed event before rendering.
pub type EventFilter = dyn for<'a> Fn(Event<'a>) -> Event<'a> + Send + Sync;

/// HTML renderer with an ordered chain of event filters.
///
/// Filters run in registration order; each one sees the output of the
/// previous filter.
#[derive(Default)]
pub struct HtmlRenderer {
    filters: Vec<Box<EventFilter>>,
}

impl fmt::Debug for HtmlRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlRenderer")
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl HtmlRenderer {
    /// Create a renderer with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event filter.
    pub fn add_filter<F>(&mut self, filter: F)
    where
        F: for<'a> Fn(Event<'a>) -> Event<'a> + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
    }

    /// Number of registered filters.
    #[must_use]
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Run an event through every filter.
    pub(crate) fn apply<'a>(&self, event: Event<'a>) -> Event<'a> {
        self.filters.iter().fold(event, |event, filter| filter(event))
    }

    /// Render events to HTML.
    pub(crate) fn push_html<'a, I>(&self, out: &mut String, events: I)
    where
        I: Iterator<Item = Event<'a>>,
    {
        pulldown_cmark::html::push_html(out, events.map(|event| self.apply(event)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pulldown_cmark::CowStr;

    #[test]
    fn test_filters_apply_in_order() {
        let mut renderer = HtmlRenderer::new();
        renderer.add_filter(|event| match event {
            Event::Text(text) => Event::Text(CowStr::from(format!("{text}1"))),
            other => other,
        });
        renderer.add_filter(|event| match event {
            Event::Text(text) => Event::Text(CowStr::from(format!("{text}2"))),
            other => other,
        });
        assert_eq!(renderer.filter_count(), 2);

        let event = renderer.apply(Event::Text(CowStr::Borrowed("x")));
        assert_eq!(event, Event::Text(CowStr::Borrowed("x12")));
    }

    #[test]
    fn test_no_filters_passes_through() {
        let renderer = HtmlRenderer::new();
        let event = renderer.apply(Event::SoftBreak);
        assert_eq!(event, Event::SoftBreak);
    }
}
