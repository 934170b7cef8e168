//! Minimal host-document model.
//!
//! The runtime contract of the composition root is expressed against this
//! model: a [`Document`] exposes exactly the surface bootstrap needs — an
//! element addressable by id to mount into, and stylesheet application as a
//! side effect.

mod document;
mod element;

pub use document::Document;
pub use element::{Element, Node};
