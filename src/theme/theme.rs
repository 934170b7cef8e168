//! Theme definitions: named role-to-color assignments plus shape tokens.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorParseError};

use super::role::ColorRole;

/// A named visual theme: one color per [`ColorRole`] plus free-form shape
/// tokens (corner radii and the like).
///
/// Themes are plain data. The builder accepts raw strings so authoring stays
/// chainable; [`Theme::validate`] checks completeness and color syntax, and
/// the stylesheet pipeline validates every theme before it generates
/// anything.
///
/// # Example
///
/// ```rust
/// use vitrine::{ColorRole, Theme};
///
/// let theme = Theme::new("sample")
///     .role(ColorRole::Primary, "#fbbf24")
///     .role(ColorRole::Secondary, "#bef264")
///     .role(ColorRole::Accent, "#c084fc")
///     .role(ColorRole::Neutral, "#374151")
///     .role(ColorRole::BaseSurface, "#1f2937")
///     .role(ColorRole::Info, "#60a5fa")
///     .role(ColorRole::Success, "#34d399")
///     .role(ColorRole::Warning, "#fb923c")
///     .role(ColorRole::Error, "#fb7185")
///     .shape_token("control-radius", "9999px");
///
/// assert!(theme.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    name: String,
    roles: BTreeMap<ColorRole, String>,
    #[serde(rename = "shapeTokens", default)]
    shape_tokens: BTreeMap<String, String>,
}

impl Theme {
    /// Creates an empty theme with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: BTreeMap::new(),
            shape_tokens: BTreeMap::new(),
        }
    }

    /// Assigns a color to a role, returning the updated theme for chaining.
    ///
    /// The value is kept verbatim; syntax is checked by [`Theme::validate`].
    pub fn role(mut self, role: ColorRole, value: impl Into<String>) -> Self {
        self.roles.insert(role, value.into());
        self
    }

    /// Sets a shape token, returning the updated theme for chaining.
    ///
    /// Token names are free-form. The pipeline looks tokens up under their
    /// kebab-case form, so `controlRadius` and `control-radius` are the
    /// same token.
    pub fn shape_token(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.shape_tokens.insert(name.into(), value.into());
        self
    }

    /// The theme's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw color value assigned to a role, if any.
    pub fn color(&self, role: ColorRole) -> Option<&str> {
        self.roles.get(&role).map(String::as_str)
    }

    /// The raw shape-token value under the given name, looked up by
    /// kebab-case form.
    pub fn token(&self, name: &str) -> Option<&str> {
        let wanted = kebab_case(name);
        self.shape_tokens
            .iter()
            .find(|(key, _)| kebab_case(key) == wanted)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over the assigned roles and their raw values.
    pub fn roles(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        self.roles.iter().map(|(role, value)| (*role, value.as_str()))
    }

    /// Iterates over the shape tokens as authored.
    pub fn shape_tokens(&self) -> impl Iterator<Item = (&str, &str)> {
        self.shape_tokens
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Checks that every required role is assigned a parseable color.
    ///
    /// # Errors
    ///
    /// [`ThemeValidationError::MissingRole`] for the first absent role,
    /// [`ThemeValidationError::InvalidColor`] for the first unparseable
    /// value.
    pub fn validate(&self) -> Result<(), ThemeValidationError> {
        self.resolve().map(|_| ())
    }

    /// Validates and parses every color, producing a [`ResolvedTheme`].
    pub fn resolve(&self) -> Result<ResolvedTheme, ThemeValidationError> {
        let mut colors = BTreeMap::new();
        for role in ColorRole::ALL {
            let value = self
                .roles
                .get(&role)
                .ok_or_else(|| ThemeValidationError::MissingRole {
                    theme: self.name.clone(),
                    role,
                })?;
            let color =
                Color::parse(value).map_err(|source| ThemeValidationError::InvalidColor {
                    theme: self.name.clone(),
                    role,
                    source,
                })?;
            colors.insert(role, color);
        }

        let tokens = self
            .shape_tokens
            .iter()
            .map(|(name, value)| (kebab_case(name), value.clone()))
            .collect();

        Ok(ResolvedTheme {
            name: self.name.clone(),
            colors,
            tokens,
        })
    }

    /// Loads and validates a theme from JSON.
    ///
    /// # Errors
    ///
    /// Syntax errors and validation failures both reject the theme; a theme
    /// file is never accepted partially.
    pub fn from_json_str(source: &str) -> Result<Self, ThemeLoadError> {
        let theme: Theme = serde_json::from_str(source).map_err(|e| ThemeLoadError::Syntax {
            message: e.to_string(),
        })?;
        theme.validate().map_err(ThemeLoadError::Invalid)?;
        Ok(theme)
    }

    /// Loads and validates a theme from YAML.
    ///
    /// # Errors
    ///
    /// Same policy as [`Theme::from_json_str`].
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeLoadError> {
        let theme: Theme = serde_yaml::from_str(source).map_err(|e| ThemeLoadError::Syntax {
            message: e.to_string(),
        })?;
        theme.validate().map_err(ThemeLoadError::Invalid)?;
        Ok(theme)
    }
}

/// A theme whose colors have all been parsed and whose token names are
/// normalized to kebab-case. This is what the pipeline and previews consume.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    name: String,
    colors: BTreeMap<ColorRole, Color>,
    tokens: BTreeMap<String, String>,
}

impl ResolvedTheme {
    /// The theme's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parsed color for a role. Present for every role by construction.
    pub fn color(&self, role: ColorRole) -> &Color {
        &self.colors[&role]
    }

    /// A shape token by kebab-case name.
    pub fn token(&self, name: &str) -> Option<&str> {
        self.tokens.get(&kebab_case(name)).map(String::as_str)
    }
}

/// The palette used when a configuration supplies no themes of its own.
/// A user theme named `default` replaces it.
pub static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new("default")
        .role(ColorRole::Primary, "#570df8")
        .role(ColorRole::Secondary, "#f000b8")
        .role(ColorRole::Accent, "#37cdbe")
        .role(ColorRole::Neutral, "#3d4451")
        .role(ColorRole::BaseSurface, "#ffffff")
        .role(ColorRole::Info, "#3abff8")
        .role(ColorRole::Success, "#36d399")
        .role(ColorRole::Warning, "#fbbd23")
        .role(ColorRole::Error, "#f87272")
        .shape_token("control-radius", "0.5rem")
});

/// Lowercases a token name and turns camelCase humps into kebab-case.
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Error returned when a theme fails validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValidationError {
    /// A required role has no color assigned.
    MissingRole { theme: String, role: ColorRole },
    /// A role's value is not a parseable color.
    InvalidColor {
        theme: String,
        role: ColorRole,
        source: ColorParseError,
    },
}

impl std::fmt::Display for ThemeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeValidationError::MissingRole { theme, role } => {
                write!(f, "theme \"{}\" is missing role \"{}\"", theme, role)
            }
            ThemeValidationError::InvalidColor {
                theme,
                role,
                source,
            } => {
                write!(f, "theme \"{}\", role \"{}\": {}", theme, role, source)
            }
        }
    }
}

impl std::error::Error for ThemeValidationError {}

/// Error returned when loading a theme from a serialized form.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeLoadError {
    /// The document could not be parsed at all.
    Syntax { message: String },
    /// The document parsed but the theme is incomplete or malformed.
    Invalid(ThemeValidationError),
}

impl std::fmt::Display for ThemeLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeLoadError::Syntax { message } => write!(f, "theme parse error: {}", message),
            ThemeLoadError::Invalid(source) => write!(f, "{}", source),
        }
    }
}

impl std::error::Error for ThemeLoadError {}
