//! Formwork Engines - backend adapters and bundled widget templates
//!
//! This crate provides the infrastructure side of Formwork: the MiniJinja and
//! Tera backend adapters, the [`DefaultBackendFactory`] that instantiates
//! them from engine descriptors, the bundled default widget templates (one
//! directory per backend flavor), and a thin TOML settings loader.
//!
//! ## Usage
//!
//! ```rust
//! use formwork_engines::standalone_renderer;
//! use formwork_core::prelude::*;
//! use serde_json::json;
//!
//! let renderer = standalone_renderer();
//! let html = renderer.render(
//!     "formwork/widgets/text.html",
//!     &RenderContext::new().with("widget", json!({
//!         "type": "text",
//!         "name": "username",
//!     })),
//! ).unwrap();
//! assert!(html.starts_with("<input"));
//! ```
//!
//! A host with its own engine configuration uses [`combined_renderer`]; its
//! engines are tried first and the bundled templates serve as the fallback.

pub mod backend;
pub mod builtin;
pub mod config;

use std::sync::Arc;

use formwork_core::application::{CombinedRenderer, StandaloneRenderer};
use formwork_core::domain::SharedSettings;

pub use backend::{DefaultBackendFactory, MiniJinjaBackend, TeraBackend};

/// A resolver over the bundled templates only.
pub fn standalone_renderer() -> StandaloneRenderer {
    StandaloneRenderer::new(Arc::new(DefaultBackendFactory::new()))
}

/// A resolver that tries the configured engines first and falls back to the
/// bundled templates.
pub fn combined_renderer(settings: SharedSettings) -> CombinedRenderer {
    CombinedRenderer::new(Arc::new(DefaultBackendFactory::new()), settings)
}
