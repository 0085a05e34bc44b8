//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Clone, Default)]
pub struct CliSettings {
    /// Override math rendering.
    pub math: Option<bool>,
    /// Override GitHub Flavored Markdown extensions.
    pub gfm: Option<bool>,
    /// Override the deepest heading level kept in the outline.
    pub toc_depth: Option<u8>,
}

impl CliSettings {
    /// Check if all override fields are None (no overrides specified).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.math.is_none() && self.gfm.is_none() && self.toc_depth.is_none()
    }
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "folio.toml";

/// Placeholder every video template must contain.
const VIDEO_PLACEHOLDER: &str = "{0}";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Plain-text extraction configuration.
    pub text: TextConfig,
    /// Video embed rules. When empty the built-in table is used.
    #[serde(rename = "video")]
    pub videos: Vec<VideoRuleConfig>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Enable tables, strikethrough and task lists.
    pub gfm: bool,
    /// Enable `$inline$` and `$$display$$` math.
    pub math: bool,
    /// Deepest heading level kept in the outline (1-6).
    pub toc_depth: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            math: false,
            toc_depth: 3,
        }
    }
}

/// Plain-text extraction configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Scripts whose letters count as word characters besides `a-z0-9`.
    pub scripts: Vec<Script>,
    /// Additional regex character class ranges, e.g. `\x{0400}-\x{04FF}`.
    pub extra_ranges: Vec<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            scripts: vec![Script::Cjk, Script::Arabic],
            extra_ranges: Vec::new(),
        }
    }
}

impl TextConfig {
    /// Extra word-character ranges as one regex class body.
    #[must_use]
    pub fn character_ranges(&self) -> String {
        let mut ranges: String = self.scripts.iter().map(|s| s.ranges()).collect();
        for extra in &self.extra_ranges {
            ranges.push_str(extra);
        }
        ranges
    }
}

/// Writing systems with predefined character ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Han ideographs and Japanese kana.
    Cjk,
    /// Korean Hangul syllables.
    Hangul,
    /// Arabic.
    Arabic,
    /// Hebrew.
    Hebrew,
    /// Cyrillic.
    Cyrillic,
    /// Greek.
    Greek,
    /// Devanagari.
    Devanagari,
    /// Thai.
    Thai,
}

impl Script {
    /// Regex character class ranges for this script.
    #[must_use]
    pub fn ranges(self) -> &'static str {
        match self {
            Self::Cjk => r"\x{3040}-\x{30FF}\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}",
            Self::Hangul => r"\x{1100}-\x{11FF}\x{AC00}-\x{D7AF}",
            Self::Arabic => r"\x{0600}-\x{06FF}\x{0750}-\x{077F}",
            Self::Hebrew => r"\x{0590}-\x{05FF}",
            Self::Cyrillic => r"\x{0400}-\x{04FF}",
            Self::Greek => r"\x{0370}-\x{03FF}",
            Self::Devanagari => r"\x{0900}-\x{097F}",
            Self::Thai => r"\x{0E00}-\x{0E7F}",
        }
    }
}

/// Video embed rule as written in `[[video]]` tables.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRuleConfig {
    /// Link class the rule applies to.
    pub class: String,
    /// Regex capturing the video identifier from the link's href.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Embed markup with a `{0}` placeholder for the identifier.
    pub template: String,
}

impl VideoRuleConfig {
    /// Validate that the rule is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the class is empty or the
    /// template has no `{0}` placeholder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(self.class.trim(), "video.class")?;
        if !self.template.contains(VIDEO_PLACEHOLDER) {
            return Err(ConfigError::Validation(format!(
                "video.template for `{}` must contain {VIDEO_PLACEHOLDER}",
                self.class
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(math) = settings.math {
            self.render.math = math;
        }
        if let Some(gfm) = settings.gfm {
            self.render.gfm = gfm;
        }
        if let Some(toc_depth) = settings.toc_depth {
            self.render.toc_depth = toc_depth;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`load`](Self::load) after CLI settings are
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_render()?;
        self.validate_text()?;
        for video in &self.videos {
            video.validate()?;
        }
        Ok(())
    }

    /// Validate render configuration.
    fn validate_render(&self) -> Result<(), ConfigError> {
        const MAX_TOC_DEPTH: u8 = 6;

        let depth = self.render.toc_depth;
        if depth == 0 || depth > MAX_TOC_DEPTH {
            return Err(ConfigError::Validation(format!(
                "render.toc_depth must be between 1 and {MAX_TOC_DEPTH}"
            )));
        }
        Ok(())
    }

    /// Validate text configuration.
    fn validate_text(&self) -> Result<(), ConfigError> {
        for range in &self.text.extra_ranges {
            require_non_empty(range, "text.extra_ranges")?;
            if range.contains(']') {
                return Err(ConfigError::Validation(format!(
                    "text.extra_ranges entry `{range}` cannot contain ]"
                )));
            }
        }
        Ok(())
    }
}
