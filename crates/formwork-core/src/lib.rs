//! Formwork Core - template resolution for form widgets
//!
//! This crate provides the domain and application layers for Formwork,
//! following hexagonal (ports and adapters) architecture: it decides *which*
//! templating engine renders a widget's markup, and falls back to the bundled
//! default templates when the host application provides none.  Template
//! parsing and execution are delegated entirely to the backend adapters in
//! `formwork-engines`.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Host application             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           Resolver Services             │
//! │  (StandaloneRenderer, CombinedRenderer, │
//! │        configuration-merging lookup)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (TemplateBackend, TemplateHandle,       │
//! │             BackendFactory)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    formwork-engines (Infrastructure)    │
//! │   (MiniJinjaBackend, TeraBackend,       │
//! │        DefaultBackendFactory)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formwork_core::prelude::*;
//!
//! // Factory and settings come from formwork-engines / the host.
//! let renderer = CombinedRenderer::new(factory, settings);
//! let html = renderer.render(
//!     "formwork/widgets/text.html",
//!     &RenderContext::new().with("widget", widget_json),
//! )?;
//! ```

// Domain layer (engine descriptors, settings, error chain)
pub mod domain;

// Application layer (resolvers and ports)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BUNDLED_APP, CombinedRenderer, StandaloneRenderer, TemplateResolver,
        ports::{BackendFactory, TemplateBackend, TemplateHandle},
    };
    pub use crate::domain::{
        BackendKind, EngineConfig, InstalledApp, RenderContext, SharedSettings, TemplateNotFound,
        TemplateSettings,
    };
    pub use crate::error::{RenderError, RenderResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
