//! Tera backend adapter.
//!
//! Builds one `tera::Tera` instance from the descriptor's search directories
//! (glob `**/*.html` under each), explicit `dirs` first, then each installed
//! application's `templates/` subdirectory when app-dir discovery is enabled.
//! On a name conflict the earlier directory wins.  Directories that do not
//! exist are skipped with a `WARN`; one bad source must not block the rest.
//!
//! Honored options (everything else is ignored):
//!
//! - `autoescape` — boolean, default `true`; HTML-escapes rendered values in
//!   `.html` templates.

use std::sync::Arc;

use tera::Tera;
use tracing::{debug, warn};

use formwork_core::application::ports::{TemplateBackend, TemplateHandle};
use formwork_core::domain::{BackendKind, EngineConfig, InstalledApp, RenderContext, TemplateNotFound};
use formwork_core::error::{RenderError, RenderResult};

use crate::builtin;

/// Templating backend built on the `tera` crate.
#[derive(Debug)]
pub struct TeraBackend {
    name: String,
    tera: Arc<Tera>,
}

impl TeraBackend {
    /// Instantiate from an engine descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Configuration`] when a directory exists but its
    /// templates fail to parse; template syntax is checked eagerly by Tera at
    /// load time.
    pub fn new(config: &EngineConfig, apps: &[InstalledApp]) -> RenderResult<Self> {
        let mut dirs = config.dirs.clone();
        if config.app_dirs {
            for app in apps {
                let dir = app.path.join(builtin::flavor_dir(BackendKind::Tera));
                if dir.is_dir() {
                    debug!(app = %app.name, dir = %dir.display(), "discovered app template dir");
                    dirs.push(dir);
                } else {
                    warn!(app = %app.name, dir = %dir.display(), "app has no templates dir");
                }
            }
        }

        let mut tera = Tera::default();
        for dir in &dirs {
            if !dir.is_dir() {
                warn!(dir = %dir.display(), "search directory does not exist, skipping");
                continue;
            }
            let glob = format!("{}/**/*.html", dir.display());
            let loaded = Tera::new(&glob).map_err(|err| RenderError::Configuration {
                message: format!(
                    "engine '{}': failed to load templates from '{}': {err}",
                    config.name,
                    dir.display()
                ),
            })?;
            // On conflicts `extend` keeps the templates already present, so
            // earlier directories take priority.
            tera.extend(&loaded).map_err(|err| RenderError::Configuration {
                message: format!(
                    "engine '{}': failed to merge templates from '{}': {err}",
                    config.name,
                    dir.display()
                ),
            })?;
        }

        apply_options(&mut tera, config);

        Ok(Self {
            name: config.name.clone(),
            tera: Arc::new(tera),
        })
    }
}

fn apply_options(tera: &mut Tera, config: &EngineConfig) {
    if let Some(value) = config.options.get("autoescape") {
        if value.as_bool() == Some(false) {
            tera.autoescape_on(vec![]);
        }
    }
}

impl TemplateBackend for TeraBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Tera
    }

    fn get_template(&self, name: &str) -> RenderResult<Box<dyn TemplateHandle>> {
        if self.tera.get_template_names().any(|t| t == name) {
            Ok(Box::new(TeraTemplate {
                engine: self.name.clone(),
                name: name.to_string(),
                tera: self.tera.clone(),
            }))
        } else {
            Err(TemplateNotFound::for_engine(name, &self.name).into())
        }
    }
}

/// Loaded-template handle; renders through the shared Tera instance.
#[derive(Debug)]
struct TeraTemplate {
    engine: String,
    name: String,
    tera: Arc<Tera>,
}

impl TemplateHandle for TeraTemplate {
    fn engine(&self) -> &str {
        &self.engine
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, context: &RenderContext) -> RenderResult<String> {
        let context =
            tera::Context::from_serialize(context).map_err(|err| RenderError::Backend {
                engine: self.engine.clone(),
                source: Box::new(err),
            })?;
        self.tera
            .render(&self.name, &context)
            .map_err(|err| RenderError::Backend {
                engine: self.engine.clone(),
                source: Box::new(err),
            })
    }
}
