//! `folio render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_document::{DocumentParser, ParsedDocument};
use rayon::prelude::*;

use super::read_source;
use crate::error::CliError;
use crate::output::Diagnostics;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown files to render.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Enable `$inline$` and `$$display$$` math (overrides config).
    #[arg(long)]
    math: bool,

    /// Disable tables, strikethrough and task lists (overrides config).
    #[arg(long)]
    no_gfm: bool,

    /// Deepest heading level kept in the outline (overrides config).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    toc_depth: Option<u8>,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    /// Settings overriding the loaded configuration.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            math: self.math.then_some(true),
            gfm: self.no_gfm.then_some(false),
            toc_depth: self.toc_depth,
        }
    }

    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        let parser = DocumentParser::from_config(&config)?;

        let documents = self
            .files
            .par_iter()
            .map(|path| {
                let source = read_source(path)?;
                tracing::info!(path = %path.display(), "Rendering document");
                Ok(parser.parse(&source))
            })
            .collect::<Result<Vec<ParsedDocument>, CliError>>()?;

        let diagnostics = Diagnostics::stderr();
        let warned: usize = self
            .files
            .iter()
            .zip(&documents)
            .map(|(path, document)| diagnostics.document_warnings(path, &document.warnings))
            .sum();
        if warned > 0 {
            tracing::info!(warnings = warned, documents = documents.len(), "Rendered with warnings");
        }

        let mut stdout = std::io::stdout().lock();
        match documents.as_slice() {
            [document] => serde_json::to_writer_pretty(&mut stdout, document)?,
            _ => serde_json::to_writer_pretty(&mut stdout, &documents)?,
        }
        writeln!(stdout)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: RenderArgs,
    }

    fn parse(argv: &[&str]) -> Result<RenderArgs, clap::Error> {
        Harness::try_parse_from(std::iter::once("render").chain(argv.iter().copied()))
            .map(|h| h.args)
    }

    #[test]
    fn test_default_flags_do_not_override() {
        let args = parse(&["a.md"]).unwrap();
        assert!(args.cli_settings().is_empty());
        assert_eq!(args.files, vec![PathBuf::from("a.md")]);
    }

    #[test]
    fn test_flags_map_to_settings() {
        let args = parse(&["--math", "--no-gfm", "--toc-depth", "4", "a.md", "b.md"]).unwrap();
        let settings = args.cli_settings();
        assert_eq!(settings.math, Some(true));
        assert_eq!(settings.gfm, Some(false));
        assert_eq!(settings.toc_depth, Some(4));
        assert_eq!(args.files.len(), 2);
    }

    #[test]
    fn test_toc_depth_out_of_range_rejected() {
        assert!(parse(&["--toc-depth", "7", "a.md"]).is_err());
        assert!(parse(&["--toc-depth", "0", "a.md"]).is_err());
    }

    #[test]
    fn test_files_required() {
        assert!(parse(&[]).is_err());
    }
}
