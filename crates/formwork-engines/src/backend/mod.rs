//! Backend adapters and the default factory.

mod minijinja;
mod tera;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument};

use formwork_core::application::ports::{BackendFactory, TemplateBackend};
use formwork_core::domain::{BackendKind, EngineConfig, InstalledApp};
use formwork_core::error::RenderResult;

use crate::builtin;

pub use self::minijinja::MiniJinjaBackend;
pub use self::tera::TeraBackend;

/// Factory over the closed backend set.
///
/// Matches on [`BackendKind`] and instantiates the corresponding adapter;
/// the bundled template directories come from [`builtin`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBackendFactory;

impl DefaultBackendFactory {
    pub fn new() -> Self {
        Self
    }
}

impl BackendFactory for DefaultBackendFactory {
    #[instrument(skip(self, config, apps), fields(engine = %config.name, backend = %config.backend))]
    fn instantiate(
        &self,
        config: &EngineConfig,
        apps: &[InstalledApp],
    ) -> RenderResult<Arc<dyn TemplateBackend>> {
        debug!(dirs = config.dirs.len(), app_dirs = config.app_dirs, "instantiating backend");
        let backend: Arc<dyn TemplateBackend> = match config.backend {
            BackendKind::MiniJinja => Arc::new(MiniJinjaBackend::new(config, apps)?),
            BackendKind::Tera => Arc::new(TeraBackend::new(config, apps)?),
        };
        Ok(backend)
    }

    fn bundled_dir(&self, kind: BackendKind) -> PathBuf {
        builtin::template_root(kind)
    }

    fn preferred_kind(&self) -> BackendKind {
        BackendKind::MiniJinja
    }
}
