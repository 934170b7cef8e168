//! The fixed set of semantic color roles a theme assigns.

use serde::{Deserialize, Serialize};

/// Semantic color roles recognized by the stylesheet pipeline.
///
/// Every theme must assign a color to each role; there is no partial theme.
/// Wire names are kebab-case (`base-surface`), matching the configuration
/// format consumed by the build step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorRole {
    /// Brand color for primary actions and emphasis.
    Primary,
    /// Supporting brand color.
    Secondary,
    /// Highlight color for callouts and focus.
    Accent,
    /// Desaturated color for chrome and dividers.
    Neutral,
    /// Base background surface.
    BaseSurface,
    /// Informational status.
    Info,
    /// Positive status.
    Success,
    /// Cautionary status.
    Warning,
    /// Failure status.
    Error,
}

impl ColorRole {
    /// All roles, in declaration order.
    pub const ALL: [ColorRole; 9] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Neutral,
        ColorRole::BaseSurface,
        ColorRole::Info,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Error,
    ];

    /// The kebab-case wire name for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Neutral => "neutral",
            ColorRole::BaseSurface => "base-surface",
            ColorRole::Info => "info",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
        }
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColorRole {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorRole::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRoleError {
                name: s.to_string(),
            })
    }
}

/// Error returned when a role name is not part of the recognized set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoleError {
    /// The unrecognized name.
    pub name: String,
}

impl std::fmt::Display for UnknownRoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown color role \"{}\"", self.name)
    }
}

impl std::error::Error for UnknownRoleError {}
