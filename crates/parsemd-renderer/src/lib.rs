//! CommonMark to HTML renderer with pluggable extension points.
//!
//! This crate wraps `pulldown-cmark` behind a small [`Markdown`] type that
//! exposes two extension points:
//!
//! - [`MarkdownParser`]: the parser options used for every conversion
//! - [`HtmlRenderer`]: an ordered list of event filters applied before HTML
//!   is emitted
//!
//! Plugins get mutable access to both before any document is converted.
//!
//! # Example
//!
//! ```
//! use parsemd_renderer::Markdown;
//!
//! let markdown = Markdown::new();
//! let html = markdown.convert(b"# Hello\n\n**Bold** text").unwrap();
//! assert_eq!(html, "<h1>Hello</h1>\n<p><strong>Bold</strong> text</p>\n");
//! ```

mod error;
mod markdown;
mod parser;
mod renderer;

pub use error::ConvertError;
pub use markdown::Markdown;
pub use parser::MarkdownParser;
pub use renderer::{EventFilter, HtmlRenderer};

pub use pulldown_cmark::{Event, Options};
