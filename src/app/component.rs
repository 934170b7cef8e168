//! The component contract the composition root assembles.

use thiserror::Error;

use crate::dom::{Element, Node};
use crate::icon::{ComponentRegistry, IconError, IconProps};

/// Error returned when a component fails to render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No component is registered under the requested alias.
    #[error("no component registered under alias \"{alias}\"")]
    UnknownAlias { alias: String },
    /// The icon capability rejected the render.
    #[error(transparent)]
    Icon(#[from] IconError),
    /// Component-specific failure.
    #[error("{0}")]
    Message(String),
}

impl RenderError {
    /// Creates a component-specific render error.
    pub fn message(message: impl Into<String>) -> Self {
        RenderError::Message(message.into())
    }
}

/// Everything a component may reach during rendering.
///
/// The registry travels down the tree through this context instead of
/// living in ambient process state, so "globally available" means
/// "reachable from every render call" while staying an explicit value
/// owned by the [`App`](crate::app::App).
pub struct RenderContext<'a> {
    registry: &'a ComponentRegistry,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(registry: &'a ComponentRegistry) -> Self {
        Self { registry }
    }

    /// The component registry populated during bootstrap.
    pub fn registry(&self) -> &ComponentRegistry {
        self.registry
    }

    /// Renders an icon through the component registered under `alias`.
    ///
    /// This is the alias-reference path markup uses: any component at any
    /// depth can draw a glyph without holding the icon capability itself.
    ///
    /// # Errors
    ///
    /// [`RenderError::UnknownAlias`] if nothing is bound under the alias;
    /// icon lookup and template failures pass through.
    pub fn icon(&self, alias: &str, glyph: &str, props: &IconProps) -> Result<Node, RenderError> {
        let renderer = self
            .registry
            .get(alias)
            .ok_or_else(|| RenderError::UnknownAlias {
                alias: alias.to_string(),
            })?;
        let markup = renderer.render(glyph, props)?;
        Ok(Node::Raw(markup))
    }
}

/// The application root definition, supplied from outside the composition
/// root.
///
/// A component renders to an element subtree. The composition root calls
/// the root component's `render` exactly once, during mount.
pub trait Component {
    /// Renders this component into an element.
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Element, RenderError>;
}
