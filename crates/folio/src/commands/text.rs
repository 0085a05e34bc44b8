//! `folio text` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use folio_config::Config;
use folio_document::DocumentParser;

use super::read_source;
use crate::error::CliError;

/// Arguments for the text command.
#[derive(Args)]
pub(crate) struct TextArgs {
    /// Markdown file to index.
    file: PathBuf,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl TextArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let parser = DocumentParser::from_config(&config)?;
        let source = read_source(&self.file)?;

        let mut stdout = std::io::stdout().lock();
        for token in parser.text(&source) {
            writeln!(stdout, "{token}")?;
        }

        Ok(())
    }
}
