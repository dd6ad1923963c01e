//! Domain layer: engine descriptors, settings, render context, and the
//! not-found error chain.  No backend-crate dependencies.

mod context;
mod engine;
mod error;
mod settings;

pub use context::RenderContext;
pub use engine::{BackendKind, EngineConfig, InstalledApp};
pub use error::TemplateNotFound;
pub use settings::{SharedSettings, TemplateSettings};
