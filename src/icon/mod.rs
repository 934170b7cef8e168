//! Icon capability: assets, the library, the renderer, and the registry.
//!
//! This module provides:
//! - [`IconGlyph`] — one opaque icon asset (name, view box, path data)
//! - [`IconLibrary`] — the glyph collection populated during bootstrap
//! - [`IconRenderer`] — the component that draws a glyph as SVG markup
//! - [`ComponentRegistry`] — alias-to-component bindings with strict
//!   collision detection
//!
//! The composition root populates the library, wraps it in a renderer, and
//! binds the renderer under a short alias (conventionally `"fa"`). From
//! then on any component can render an icon by alias through its
//! [`RenderContext`](crate::app::RenderContext) without importing this
//! module.

mod error;
mod glyph;
mod library;
mod registry;
mod renderer;

pub use error::IconError;
pub use glyph::IconGlyph;
pub use library::IconLibrary;
pub use registry::ComponentRegistry;
pub use renderer::{IconProps, IconRenderer};
