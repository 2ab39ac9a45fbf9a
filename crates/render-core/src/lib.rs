//! Render dispatch core for the folio pipeline.
//!
//! This crate provides the rendering abstractions the orchestration layer
//! builds on:
//! - [`RenderFn`] / [`RenderOutcome`]: explicitly-partial render functions
//! - [`RenderChain`]: override-aware effective dispatch (overrides first,
//!   format default as fallback)
//! - [`RendererFactory`]: the contract a concrete output format fulfills
//! - [`render_scoped`]: one node to one destination with guaranteed writer
//!   release

mod chain;
mod error;
mod factory;
mod scoped;

pub use chain::{RenderChain, RenderFn, RenderOutcome};
pub use error::RenderError;
pub use factory::RendererFactory;
pub use scoped::{render_scoped, render_to_bytes, render_to_string};
