//! Plugin pipeline for markdown conversion.
//!
//! A [`PluginManager`] holds an ordered list of [`Plugin`]s. Before any
//! document is converted, each plugin may extend the markdown parser and
//! renderer. After rendering, the HTML is folded through every plugin's
//! [`Plugin::process_html`] in registration order.
//!
//! The bundled [`TodoPlugin`] rewrites checkbox-style list items
//! (`- [ ] task`, `* [x] done`) into todo blocks.
//!
//! # Example
//!
//! ```
//! use parsemd_plugins::{PluginManager, TodoPlugin};
//!
//! let mut manager = PluginManager::new();
//! manager.register(TodoPlugin);
//!
//! let html = manager.process_html("<li>- [x] Ship it</li>");
//! assert!(html.contains(r#"<div class="todo-item completed">"#));
//! ```

mod manager;
mod pipeline;
mod plugin;
mod todo;
mod todo_processor;

pub use manager::PluginManager;
pub use pipeline::convert;
pub use plugin::Plugin;
pub use todo::{TODO_MARKERS, TodoPlugin, extract_todo_text, is_todo_item, is_todo_item_checked};
pub use todo_processor::TodoProcessor;

pub use parsemd_renderer::{ConvertError, HtmlRenderer, Markdown, MarkdownParser};
