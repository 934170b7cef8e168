//! Theme definitions for the stylesheet pipeline.
//!
//! This module provides:
//! - [`ColorRole`] — the fixed set of semantic color roles
//! - [`Theme`] — a named role-to-color mapping plus shape tokens
//! - [`ResolvedTheme`] — a validated theme with parsed colors
//! - [`DEFAULT_THEME`] — the palette used when no theme is configured
//!
//! Themes are inert data: authored once, validated eagerly, consumed by the
//! build-time pipeline in [`crate::css`]. The terminal preview in this
//! module is a development aid, not part of the generated output.

mod preview;
mod role;
#[allow(clippy::module_inception)]
mod theme;

pub use role::{ColorRole, UnknownRoleError};
pub use theme::{ResolvedTheme, Theme, ThemeLoadError, ThemeValidationError, DEFAULT_THEME};
