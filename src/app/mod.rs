//! The composition root: the single place where the application's
//! top-level object graph is assembled and started.
//!
//! This module provides:
//! - [`Component`] — the contract the external root definition implements
//! - [`AppBuilder`] — collects the root, stylesheet, glyphs, and aliases
//! - [`App`] — the constructed instance and its run-once bootstrap
//! - [`BootstrapError`] — the fatal startup error taxonomy
//!
//! Bootstrap is strictly sequential and synchronous; there is no
//! suspension point and no retry. The only non-fatal failure is a
//! stylesheet that cannot be loaded, which degrades presentation and
//! nothing else.

#[allow(clippy::module_inception)]
mod app;
mod builder;
mod component;
mod error;

pub use app::App;
pub use builder::{AppBuilder, StylesheetSource};
pub use component::{Component, RenderContext, RenderError};
pub use error::BootstrapError;
