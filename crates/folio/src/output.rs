//! Diagnostics written to stderr, leaving stdout to the rendered JSON.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

/// Reporter for per-document warnings and the final failure.
pub(crate) struct Diagnostics {
    term: Term,
    source: Style,
    warning: Style,
    failure: Style,
}

impl Diagnostics {
    /// Colored reporter on stderr. Styling follows the terminal.
    pub(crate) fn stderr() -> Self {
        Self {
            term: Term::stderr(),
            source: Style::new().for_stderr().bold(),
            warning: Style::new().for_stderr().yellow(),
            failure: Style::new().for_stderr().red().bold(),
        }
    }

    /// Report the renderer warnings of one source file.
    ///
    /// Returns the number of lines written.
    pub(crate) fn document_warnings(&self, path: &Path, warnings: &[String]) -> usize {
        for warning in warnings {
            let _ = self.term.write_line(&self.warning_line(path, warning));
        }
        warnings.len()
    }

    /// Report the error that ends the run.
    pub(crate) fn failure(&self, err: &impl Display) {
        let _ = self.term.write_line(&self.failure_line(err));
    }

    fn warning_line(&self, path: &Path, warning: &str) -> String {
        format!(
            "{}: {} {warning}",
            self.source.apply_to(path.display()),
            self.warning.apply_to("warning:"),
        )
    }

    fn failure_line(&self, err: &impl Display) -> String {
        format!("{} {err}", self.failure.apply_to("error:"))
    }
}
