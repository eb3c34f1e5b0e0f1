//! `parsemd convert` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use parsemd_config::{CliSettings, Config};
use parsemd_plugins::{Markdown, PluginManager, TodoPlugin};

use crate::error::{CliError, read_file};
use crate::output::print_document;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Markdown file to convert.
    file: PathBuf,

    /// Enable GitHub Flavored Markdown extensions (overrides config).
    #[arg(long)]
    gfm: bool,

    /// Do not register the todo plugin (overrides config).
    #[arg(long)]
    no_todo: bool,
}

impl ConvertArgs {
    /// Execute the convert command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, reading or conversion fails.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            gfm: self.gfm.then_some(true),
            todo: self.no_todo.then_some(false),
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let data = read_file(self.file)?;

        let manager = plugin_manager(&config);
        let mut markdown = Markdown::new().with_gfm(config.markdown.gfm);
        manager.extend(&mut markdown);
        tracing::info!(plugins = ?manager, gfm = config.markdown.gfm, "Converting");

        let html = manager.convert(&markdown, &data)?;
        print_document(&html)?;
        Ok(())
    }
}

/// Build the plugin manager for the given configuration.
fn plugin_manager(config: &Config) -> PluginManager {
    let mut manager = PluginManager::new();
    if config.plugins.todo {
        manager.register(TodoPlugin);
    }
    manager
}
