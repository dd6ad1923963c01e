//! Driven (output) ports - implemented by the engines crate.
//!
//! These traits define what the resolvers need from a templating backend.
//! The `formwork-engines` crate provides the MiniJinja and Tera
//! implementations plus the [`BackendFactory`] that instantiates them.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{BackendKind, EngineConfig, InstalledApp, RenderContext};
use crate::error::RenderResult;

/// An opaque, backend-specific loaded template.
///
/// Handles stay valid for as long as the backend that produced them; they
/// re-resolve through the backend's own cache on each render.
pub trait TemplateHandle: std::fmt::Debug + Send + Sync {
    /// Name of the engine this template was loaded from.
    fn engine(&self) -> &str;

    /// The template name the handle was resolved for.
    fn name(&self) -> &str;

    /// Render the template with the given context.
    ///
    /// Backend-internal failures (syntax errors, missing includes) propagate
    /// as [`RenderError::Backend`](crate::error::RenderError::Backend).
    fn render(&self, context: &RenderContext) -> RenderResult<String>;
}

/// A pluggable templating backend responsible for loading named templates.
///
/// Implemented by:
/// - `formwork_engines::backend::MiniJinjaBackend`
/// - `formwork_engines::backend::TeraBackend`
pub trait TemplateBackend: Send + Sync {
    /// Engine instance name (from the descriptor).
    fn name(&self) -> &str;

    /// Which backend implementation this is.
    fn kind(&self) -> BackendKind;

    /// Load a template by name.
    ///
    /// Fails with [`RenderError::NotFound`](crate::error::RenderError::NotFound)
    /// when the name is absent from this backend's directory set; any other
    /// failure propagates unmodified.
    fn get_template(&self, name: &str) -> RenderResult<Box<dyn TemplateHandle>>;
}

/// Instantiates backends from engine descriptors.
///
/// The factory also owns knowledge of where the bundled default templates
/// live and which backend kind the standalone resolver should prefer, keeping
/// both decisions at the adapter seam (and overridable in tests).
pub trait BackendFactory: Send + Sync {
    /// Instantiate the backend described by `config`, resolving app-directory
    /// auto-discovery against the installed-application registry.
    fn instantiate(
        &self,
        config: &EngineConfig,
        apps: &[InstalledApp],
    ) -> RenderResult<Arc<dyn TemplateBackend>>;

    /// The bundled default template directory for a backend kind.
    fn bundled_dir(&self, kind: BackendKind) -> PathBuf;

    /// The backend kind the standalone resolver prefers.
    fn preferred_kind(&self) -> BackendKind {
        BackendKind::MiniJinja
    }
}
