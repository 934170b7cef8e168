//! The application instance and its bootstrap sequence.

use tracing::{debug, warn};

use super::builder::{AppBuilder, StylesheetSource};
use super::component::{Component, RenderContext};
use super::error::BootstrapError;
use crate::dom::{Document, Node};
use crate::icon::{ComponentRegistry, IconGlyph, IconLibrary, IconRenderer};

/// Where the application is in its life. There is exactly one transition
/// and it is irreversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Uninitialized,
    Mounted,
}

/// A constructed application instance, ready to bootstrap into a host
/// document.
///
/// The bootstrap sequence runs once, synchronously, to completion:
///
/// 1. **Construct** — already done by [`AppBuilder::build`]; a missing
///    root definition never produces an `App` at all.
/// 2. **Stylesheet** — applied to the document as a pure side effect. A
///    stylesheet that cannot be read is logged and skipped; presentation
///    degrades, bootstrap continues.
/// 3. **Register** — the icon library is populated and the renderer bound
///    under each configured alias. Collisions abort bootstrap.
/// 4. **Mount** — the root component renders and its element is attached
///    to the mount target. Registration precedes mount because mounted
///    content may resolve aliases during its very first render.
///
/// The mount target is resolved before any of the side-effecting steps, so
/// a missing target aborts bootstrap with the document and registry both
/// untouched.
///
/// # Example
///
/// ```rust,ignore
/// let mut doc = Document::with_body(Element::new("body")
///     .with_child(Element::new("div").with_id("app")));
/// let mut app = App::builder()
///     .root(Shell)
///     .glyph(rocket_glyph())
///     .component("fa")
///     .build()?;
/// app.bootstrap(&mut doc)?;
/// assert!(app.is_mounted());
/// ```
pub struct App {
    root: Box<dyn Component>,
    selector: String,
    target_id: String,
    stylesheet: Option<StylesheetSource>,
    glyphs: Vec<IconGlyph>,
    aliases: Vec<String>,
    registry: ComponentRegistry,
    state: AppState,
}

impl App {
    /// Starts building an application instance.
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub(crate) fn new(
        root: Box<dyn Component>,
        selector: String,
        target_id: String,
        stylesheet: Option<StylesheetSource>,
        glyphs: Vec<IconGlyph>,
        aliases: Vec<String>,
    ) -> Self {
        Self {
            root,
            selector,
            target_id,
            stylesheet,
            glyphs,
            aliases,
            registry: ComponentRegistry::new(),
            state: AppState::Uninitialized,
        }
    }

    /// The configured mount selector.
    pub fn mount_selector(&self) -> &str {
        &self.selector
    }

    /// Whether the single `uninitialized → mounted` transition happened.
    pub fn is_mounted(&self) -> bool {
        self.state == AppState::Mounted
    }

    /// The component registry. Empty until bootstrap registers into it.
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Resolves a global alias to its component.
    pub fn component(&self, alias: &str) -> Option<&IconRenderer> {
        self.registry.get(alias)
    }

    /// Runs the bootstrap sequence against a host document.
    ///
    /// # Errors
    ///
    /// - [`BootstrapError::AlreadyMounted`] on a second invocation; the
    ///   sequence is strictly run-once.
    /// - [`BootstrapError::MountTargetMissing`] when the document has no
    ///   element with the configured id. Raised before any registration or
    ///   stylesheet side effect.
    /// - [`BootstrapError::Component`] on glyph or alias collisions.
    /// - [`BootstrapError::Render`] when the root component fails.
    pub fn bootstrap(&mut self, doc: &mut Document) -> Result<(), BootstrapError> {
        if self.state == AppState::Mounted {
            return Err(BootstrapError::AlreadyMounted);
        }

        // The fatal environment check comes first: nothing may touch the
        // document or the registry if there is nowhere to mount.
        if doc.element_by_id(&self.target_id).is_none() {
            return Err(BootstrapError::MountTargetMissing {
                selector: self.selector.clone(),
            });
        }

        self.apply_stylesheet(doc);
        self.register_components()?;
        self.mount(doc)?;

        self.state = AppState::Mounted;
        debug!(selector = %self.selector, "application mounted");
        Ok(())
    }

    fn apply_stylesheet(&self, doc: &mut Document) {
        match &self.stylesheet {
            Some(StylesheetSource::Inline(css)) => {
                doc.apply_stylesheet(css.clone());
                debug!("stylesheet applied");
            }
            Some(StylesheetSource::Path(path)) => match std::fs::read_to_string(path) {
                Ok(css) => {
                    doc.apply_stylesheet(css);
                    debug!(path = %path.display(), "stylesheet applied");
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "stylesheet unavailable, continuing with degraded presentation"
                    );
                }
            },
            None => debug!("no stylesheet configured"),
        }
    }

    fn register_components(&mut self) -> Result<(), BootstrapError> {
        let mut library = IconLibrary::new();
        for glyph in self.glyphs.drain(..) {
            library.add(glyph)?;
        }
        debug!(glyphs = library.len(), "icon library populated");

        for alias in std::mem::take(&mut self.aliases) {
            let renderer = IconRenderer::new(library.clone())?;
            self.registry.register(&alias, renderer)?;
            debug!(alias = %alias, "component registered");
        }
        Ok(())
    }

    fn mount(&mut self, doc: &mut Document) -> Result<(), BootstrapError> {
        let ctx = RenderContext::new(&self.registry);
        let rendered = self.root.render(&ctx)?;

        // Checked before the side-effecting steps; still present here by
        // the single-writer contract on the document.
        let target = doc.element_by_id_mut(&self.target_id).ok_or_else(|| {
            BootstrapError::MountTargetMissing {
                selector: self.selector.clone(),
            }
        })?;
        target.append(Node::Element(rendered));
        Ok(())
    }
}
