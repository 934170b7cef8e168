//! The stylesheet pipeline's configuration value.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Options passed to the theming plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    /// Themes to merge over the built-in palette. The first theme listed is
    /// the one utility classes resolve against.
    #[serde(default)]
    pub themes: Vec<Theme>,
}

/// Configuration consumed by the stylesheet pipeline.
///
/// The field names and nesting are the pipeline's external contract:
/// `{ pluginOptions: { themes: [...] }, plugins: [...], content: [...] }`.
/// The value itself performs no validation — that happens when a
/// [`Generator`](crate::css::Generator) is constructed from it.
///
/// # Example
///
/// ```rust
/// use vitrine::{StylesheetConfig, Theme};
///
/// let config = StylesheetConfig::new()
///     .theme(Theme::new("sample"))
///     .plugin("themer")
///     .content("src/**/*.html");
/// assert_eq!(config.content, ["src/**/*.html"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylesheetConfig {
    /// Theming plugin options.
    #[serde(rename = "pluginOptions", default)]
    pub plugin_options: PluginOptions,
    /// Names of the plugins the pipeline should activate.
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Globs selecting the source files scanned for class usage, relative
    /// to the scan root.
    #[serde(default)]
    pub content: Vec<String>,
}

impl StylesheetConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a theme, returning the updated configuration for chaining.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.plugin_options.themes.push(theme);
        self
    }

    /// Appends a plugin name.
    pub fn plugin(mut self, name: impl Into<String>) -> Self {
        self.plugins.push(name.into());
        self
    }

    /// Appends a content glob.
    pub fn content(mut self, glob: impl Into<String>) -> Self {
        self.content.push(glob.into());
        self
    }

    /// Loads a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigParseError`] on malformed documents. Theme
    /// completeness is deliberately not checked here; the generator
    /// validates eagerly on construction.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigParseError> {
        serde_json::from_str(source).map_err(|e| ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Loads a configuration from YAML.
    ///
    /// # Errors
    ///
    /// Same policy as [`StylesheetConfig::from_json_str`].
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigParseError> {
        serde_yaml::from_str(source).map_err(|e| ConfigParseError {
            message: e.to_string(),
        })
    }
}

/// Error returned when a configuration document cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigParseError {
    /// What the parser reported.
    pub message: String,
}

impl std::fmt::Display for ConfigParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stylesheet config parse error: {}", self.message)
    }
}

impl std::error::Error for ConfigParseError {}
