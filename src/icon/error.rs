//! Icon capability errors.

/// Error returned by icon library, renderer, and registry operations.
///
/// Collisions are configuration errors: an alias or glyph name bound twice
/// would make lookups ambiguous for the lifetime of the application, so
/// both are rejected at registration time rather than resolved silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// A glyph with this name is already in the library.
    DuplicateGlyph { name: String },
    /// No glyph with this name exists in the library.
    UnknownGlyph { name: String },
    /// A component is already registered under this alias.
    AliasCollision { alias: String },
    /// The renderer's markup template failed to compile or render.
    Render { message: String },
}

impl std::fmt::Display for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconError::DuplicateGlyph { name } => {
                write!(f, "glyph \"{}\" is already in the library", name)
            }
            IconError::UnknownGlyph { name } => {
                write!(f, "no glyph named \"{}\" in the library", name)
            }
            IconError::AliasCollision { alias } => {
                write!(f, "component alias \"{}\" is already registered", alias)
            }
            IconError::Render { message } => {
                write!(f, "icon markup rendering failed: {}", message)
            }
        }
    }
}

impl std::error::Error for IconError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_display_names_alias() {
        let err = IconError::AliasCollision {
            alias: "fa".to_string(),
        };
        assert!(err.to_string().contains("fa"));
    }

    #[test]
    fn test_unknown_glyph_display_names_glyph() {
        let err = IconError::UnknownGlyph {
            name: "rocket".to_string(),
        };
        assert!(err.to_string().contains("rocket"));
    }
}
