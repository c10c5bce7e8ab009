use crate::error::{Result, VisualizerError};
use serde::Deserialize;
use std::env;
use std::fs;

/// Rendering options.
///
/// Every field has a default so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Text blocks longer than this (in characters) are collapsed after a preview
    pub long_text_threshold: usize,

    /// Characters of a cited excerpt shown before "show more"
    pub citation_excerpt_limit: usize,

    /// Nested tool result blocks deeper than this are listed by type only
    pub max_nesting_depth: usize,

    /// Embed base64 images as `data:` URIs
    pub inline_images: bool,

    /// Show the token usage strip under the header
    pub show_usage: bool,

    /// Attach block type descriptions as hover tooltips
    pub show_tooltips: bool,

    /// Header title
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            long_text_threshold: 1000,
            citation_excerpt_limit: 100,
            max_nesting_depth: 4,
            inline_images: true,
            show_usage: true,
            show_tooltips: true,
            title: "Claude API Response".to_string(),
        }
    }
}

impl RenderConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| VisualizerError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config: RenderConfig = toml::from_str(&contents).map_err(|e| {
            VisualizerError::Config(format!("Failed to parse config file: {}", e))
        })?;

        // Allow environment variables to override file config
        config.apply_env()?;

        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Some(v) = env_usize("CMV_LONG_TEXT_THRESHOLD")? {
            self.long_text_threshold = v;
        }
        if let Some(v) = env_usize("CMV_CITATION_EXCERPT_LIMIT")? {
            self.citation_excerpt_limit = v;
        }
        if let Some(v) = env_usize("CMV_MAX_NESTING_DEPTH")? {
            self.max_nesting_depth = v;
        }
        if let Some(v) = env_bool("CMV_INLINE_IMAGES")? {
            self.inline_images = v;
        }
        if let Some(v) = env_bool("CMV_SHOW_USAGE")? {
            self.show_usage = v;
        }
        if let Some(v) = env_bool("CMV_SHOW_TOOLTIPS")? {
            self.show_tooltips = v;
        }
        if let Some(title) = env_var("CMV_TITLE")? {
            self.title = title;
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.long_text_threshold == 0 {
            return Err(VisualizerError::Config(
                "long_text_threshold must be greater than 0".to_string(),
            ));
        }

        if self.citation_excerpt_limit == 0 {
            return Err(VisualizerError::Config(
                "citation_excerpt_limit must be greater than 0".to_string(),
            ));
        }

        if self.max_nesting_depth == 0 {
            return Err(VisualizerError::Config(
                "max_nesting_depth must be at least 1".to_string(),
            ));
        }

        if self.title.trim().is_empty() {
            return Err(VisualizerError::Config("Title is empty".to_string()));
        }

        Ok(())
    }
}

/// Unset variables are `None`; values that are not valid unicode are errors
fn env_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(raw) => Ok(Some(raw)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    env_var(key)?
        .map(|raw| {
            raw.parse::<usize>()
                .map_err(|e| VisualizerError::Config(format!("Invalid {} value: {}", key, e)))
        })
        .transpose()
}

fn env_bool(key: &str) -> Result<Option<bool>> {
    env_var(key)?
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(VisualizerError::Config(format!(
                "Invalid {} value: {}",
                key, other
            ))),
        })
        .transpose()
}
