//! Builder for application instances.

use std::path::PathBuf;

use super::app::App;
use super::component::Component;
use super::error::BootstrapError;
use crate::icon::IconGlyph;

/// Where the application stylesheet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetSource {
    /// CSS text supplied directly, typically the output of the build-time
    /// pipeline in [`crate::css`].
    Inline(String),
    /// CSS read from a file at bootstrap time. A missing or unreadable
    /// file degrades presentation but never blocks bootstrap.
    Path(PathBuf),
}

/// Builder collecting everything the composition root assembles.
///
/// # Example
///
/// ```rust,ignore
/// let app = App::builder()
///     .root(Shell)
///     .glyph(IconGlyph::new("rocket", "0 0 512 512", "M156 384..."))
///     .component("fa")
///     .stylesheet_inline(css)
///     .mount_selector("#app")
///     .build()?;
/// ```
#[derive(Default)]
pub struct AppBuilder {
    root: Option<Box<dyn Component>>,
    mount_selector: Option<String>,
    stylesheet: Option<StylesheetSource>,
    glyphs: Vec<IconGlyph>,
    aliases: Vec<String>,
}

impl AppBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application root definition. Required.
    pub fn root(mut self, component: impl Component + 'static) -> Self {
        self.root = Some(Box::new(component));
        self
    }

    /// Sets the mount selector. Defaults to `#app`. Only id selectors are
    /// supported; anything else is rejected by [`AppBuilder::build`].
    pub fn mount_selector(mut self, selector: impl Into<String>) -> Self {
        self.mount_selector = Some(selector.into());
        self
    }

    /// Supplies the stylesheet as inline CSS text.
    pub fn stylesheet_inline(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = Some(StylesheetSource::Inline(css.into()));
        self
    }

    /// Supplies the stylesheet as a file path, read during bootstrap.
    pub fn stylesheet_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheet = Some(StylesheetSource::Path(path.into()));
        self
    }

    /// Adds a glyph to the icon library populated during bootstrap.
    pub fn glyph(mut self, glyph: IconGlyph) -> Self {
        self.glyphs.push(glyph);
        self
    }

    /// Binds the icon renderer under a global alias (conventionally
    /// `"fa"`). May be called more than once to expose several aliases;
    /// binding the same alias twice is caught during bootstrap.
    pub fn component(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Constructs the application instance.
    ///
    /// This is step one of the bootstrap sequence: a malformed or missing
    /// root definition fails here, fatally, before any side effect.
    ///
    /// # Errors
    ///
    /// [`BootstrapError::MissingRoot`] without a root component,
    /// [`BootstrapError::UnsupportedSelector`] for a selector that is not
    /// `#` followed by an id.
    pub fn build(self) -> Result<App, BootstrapError> {
        let root = self.root.ok_or(BootstrapError::MissingRoot)?;

        let selector = self.mount_selector.unwrap_or_else(|| "#app".to_string());
        let id = selector
            .strip_prefix('#')
            .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
            .ok_or_else(|| BootstrapError::UnsupportedSelector {
                selector: selector.clone(),
            })?
            .to_string();

        tracing::debug!(selector = %selector, glyphs = self.glyphs.len(), "application instance constructed");
        Ok(App::new(
            root,
            selector,
            id,
            self.stylesheet,
            self.glyphs,
            self.aliases,
        ))
    }
}
