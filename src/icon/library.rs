//! The glyph library populated during bootstrap.

use std::collections::HashMap;

use super::error::IconError;
use super::glyph::IconGlyph;

/// A collection of glyphs, keyed by name.
///
/// The library is populated once, before the application mounts, and read
/// for the rest of the process lifetime. A name maps to exactly one glyph:
/// re-adding an existing name is rejected so a rendered icon can never
/// silently change identity.
///
/// # Example
///
/// ```rust
/// use vitrine::{IconGlyph, IconLibrary};
///
/// let mut library = IconLibrary::new();
/// library.add(IconGlyph::new("rocket", "0 0 512 512", "M156 384...")).unwrap();
/// assert!(library.get("rocket").is_some());
///
/// let again = IconGlyph::new("rocket", "0 0 16 16", "M0 0...");
/// assert!(library.add(again).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconLibrary {
    glyphs: HashMap<String, IconGlyph>,
}

impl IconLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a glyph to the library.
    ///
    /// # Errors
    ///
    /// [`IconError::DuplicateGlyph`] if a glyph with the same name is
    /// already present — the existing glyph is kept.
    pub fn add(&mut self, glyph: IconGlyph) -> Result<(), IconError> {
        if self.glyphs.contains_key(glyph.name()) {
            return Err(IconError::DuplicateGlyph {
                name: glyph.name().to_string(),
            });
        }
        self.glyphs.insert(glyph.name().to_string(), glyph);
        Ok(())
    }

    /// Looks a glyph up by name.
    pub fn get(&self, name: &str) -> Option<&IconGlyph> {
        self.glyphs.get(name)
    }

    /// The names of all glyphs, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.glyphs.keys().map(String::as_str)
    }

    /// Number of glyphs in the library.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rocket() -> IconGlyph {
        IconGlyph::new("rocket", "0 0 512 512", "M156 384")
    }

    #[test]
    fn test_add_and_get() {
        let mut library = IconLibrary::new();
        library.add(rocket()).unwrap();
        assert_eq!(library.get("rocket").unwrap().view_box(), "0 0 512 512");
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_duplicate_name_is_rejected_and_original_kept() {
        let mut library = IconLibrary::new();
        library.add(rocket()).unwrap();
        let err = library
            .add(IconGlyph::new("rocket", "0 0 16 16", "M0 0"))
            .unwrap_err();
        assert_eq!(
            err,
            IconError::DuplicateGlyph {
                name: "rocket".to_string()
            }
        );
        assert_eq!(library.get("rocket").unwrap().view_box(), "0 0 512 512");
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert!(IconLibrary::new().get("ghost").is_none());
    }
}
