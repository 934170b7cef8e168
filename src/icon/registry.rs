//! The component registry behind global alias resolution.

use std::collections::HashMap;

use super::error::IconError;
use super::renderer::IconRenderer;

/// Registry binding short aliases to renderable icon components.
///
/// This is the "globally available" capability of the application — but as
/// an explicit value owned by the composition root and handed to render
/// contexts, not ambient process state. It is written exactly once, during
/// bootstrap, and read-only afterwards.
///
/// # Collision policy
///
/// Registering an alias twice is a configuration error, caught here rather
/// than resolved by silent replacement: mounted content referring to the
/// alias must never observe it switching components.
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<String, IconRenderer>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds an alias to a component.
    ///
    /// # Errors
    ///
    /// [`IconError::AliasCollision`] if the alias is taken — the existing
    /// binding is kept.
    pub fn register(
        &mut self,
        alias: impl Into<String>,
        component: IconRenderer,
    ) -> Result<(), IconError> {
        let alias = alias.into();
        if self.components.contains_key(&alias) {
            return Err(IconError::AliasCollision { alias });
        }
        self.components.insert(alias, component);
        Ok(())
    }

    /// Resolves an alias to its component.
    pub fn get(&self, alias: &str) -> Option<&IconRenderer> {
        self.components.get(alias)
    }

    /// All registered aliases, in no particular order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether nothing is registered yet.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::glyph::IconGlyph;
    use crate::icon::library::IconLibrary;

    fn renderer() -> IconRenderer {
        let mut library = IconLibrary::new();
        library
            .add(IconGlyph::new("rocket", "0 0 512 512", "M156 384"))
            .unwrap();
        IconRenderer::new(library).unwrap()
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ComponentRegistry::new();
        registry.register("fa", renderer()).unwrap();
        assert!(registry.get("fa").is_some());
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn test_collision_keeps_first_binding() {
        let mut registry = ComponentRegistry::new();
        registry.register("fa", renderer()).unwrap();

        let mut other_library = IconLibrary::new();
        other_library
            .add(IconGlyph::new("anchor", "0 0 16 16", "M0 0"))
            .unwrap();
        let err = registry
            .register("fa", IconRenderer::new(other_library).unwrap())
            .unwrap_err();

        assert_eq!(
            err,
            IconError::AliasCollision {
                alias: "fa".to_string()
            }
        );
        // The original component still resolves.
        assert!(registry.get("fa").unwrap().library().get("rocket").is_some());
    }

    #[test]
    fn test_aliases_lists_registered_names() {
        let mut registry = ComponentRegistry::new();
        registry.register("fa", renderer()).unwrap();
        let aliases: Vec<&str> = registry.aliases().collect();
        assert_eq!(aliases, ["fa"]);
    }
}
