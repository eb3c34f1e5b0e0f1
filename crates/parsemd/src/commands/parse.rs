//! `parsemd parse` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{CliError, read_file};
use crate::output::print_document;

/// Arguments for the parse command.
#[derive(Args)]
pub(crate) struct ParseArgs {
    /// Markdown file to display.
    file: PathBuf,
}

impl ParseArgs {
    /// Print the file content unchanged.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let data = read_file(self.file)?;
        print_document(&data)?;
        Ok(())
    }
}
