//! Application composition and themed, content-aware stylesheet
//! generation.
//!
//! vitrine covers the two bookends of a small application's presentation
//! layer:
//!
//! - **Build time** — [`StylesheetConfig`] declares named [`Theme`]s (a
//!   color per [`ColorRole`] plus shape tokens) and content globs; a
//!   [`Generator`] merges the themes over a default palette and emits only
//!   the CSS for classes actually found under those globs.
//! - **Run time** — [`App`] assembles the application instance: it applies
//!   the generated stylesheet to a host [`Document`], registers the icon
//!   capability ([`IconLibrary`] + [`IconRenderer`]) under a global alias,
//!   and mounts the root [`Component`] into the document's mount point.
//!   All of it happens once, in order, before first paint.
//!
//! # Example
//!
//! ```rust
//! use vitrine::{
//!     App, Component, Document, Element, IconGlyph, IconProps, RenderContext, RenderError,
//! };
//!
//! struct Shell;
//!
//! impl Component for Shell {
//!     fn render(&self, ctx: &RenderContext<'_>) -> Result<Element, RenderError> {
//!         let icon = ctx.icon("fa", "rocket", &IconProps::new())?;
//!         Ok(Element::new("main").with_node(icon))
//!     }
//! }
//!
//! let mut doc = Document::with_body(
//!     Element::new("body").with_child(Element::new("div").with_id("app")),
//! );
//!
//! let mut app = App::builder()
//!     .root(Shell)
//!     .glyph(IconGlyph::new("rocket", "0 0 512 512", "M156 384"))
//!     .component("fa")
//!     .build()
//!     .unwrap();
//!
//! app.bootstrap(&mut doc).unwrap();
//! assert!(doc.to_html().contains("icon-rocket"));
//! ```

pub mod app;
pub mod color;
pub mod css;
pub mod dom;
pub mod icon;
pub mod theme;

pub use app::{App, AppBuilder, BootstrapError, Component, RenderContext, RenderError, StylesheetSource};
pub use color::{Color, ColorParseError};
pub use css::{
    ConfigParseError, ContentScanner, Generator, GeneratorError, PatternError, PluginOptions,
    ScanReport, StylesheetConfig,
};
pub use dom::{Document, Element, Node};
pub use icon::{ComponentRegistry, IconError, IconGlyph, IconLibrary, IconProps, IconRenderer};
pub use theme::{
    ColorRole, ResolvedTheme, Theme, ThemeLoadError, ThemeValidationError, UnknownRoleError,
    DEFAULT_THEME,
};
