//! CLI command implementations.

mod render;
mod text;

use std::path::{Path, PathBuf};

pub(crate) use render::RenderArgs;
pub(crate) use text::TextArgs;

use crate::error::CliError;

/// Read a markdown source file.
fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: PathBuf::from(path),
        source,
    })
}
