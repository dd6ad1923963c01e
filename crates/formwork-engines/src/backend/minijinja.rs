//! MiniJinja backend adapter.
//!
//! Wraps a `minijinja::Environment` whose loader walks the descriptor's
//! search directories in priority order: explicit `dirs` first, then each
//! installed application's `jinja/` subdirectory when app-dir discovery is
//! enabled.
//!
//! Honored options (everything else is ignored):
//!
//! - `undefined` — `"strict"`, `"chainable"` or `"lenient"` (default);
//!   controls how references to missing context values behave.

use std::path::PathBuf;
use std::sync::Arc;

use minijinja::{Environment, ErrorKind, UndefinedBehavior, Value};
use tracing::{debug, warn};

use formwork_core::application::ports::{TemplateBackend, TemplateHandle};
use formwork_core::domain::{BackendKind, EngineConfig, InstalledApp, RenderContext, TemplateNotFound};
use formwork_core::error::{RenderError, RenderResult};

use crate::builtin;

/// Templating backend built on the `minijinja` crate.
#[derive(Debug)]
pub struct MiniJinjaBackend {
    name: String,
    env: Arc<Environment<'static>>,
}

impl MiniJinjaBackend {
    /// Instantiate from an engine descriptor.
    ///
    /// Auto-discovered app directories that do not exist are skipped with a
    /// `WARN`; explicit `dirs` are kept as configured so a misspelled
    /// directory surfaces as a miss rather than silently vanishing.
    pub fn new(config: &EngineConfig, apps: &[InstalledApp]) -> RenderResult<Self> {
        let mut dirs = config.dirs.clone();
        if config.app_dirs {
            for app in apps {
                let dir = app.path.join(builtin::flavor_dir(BackendKind::MiniJinja));
                if dir.is_dir() {
                    debug!(app = %app.name, dir = %dir.display(), "discovered app template dir");
                    dirs.push(dir);
                } else {
                    warn!(app = %app.name, dir = %dir.display(), "app has no jinja template dir");
                }
            }
        }

        let mut env = Environment::new();
        apply_options(&mut env, config)?;
        env.set_loader(move |name| {
            for dir in &dirs {
                if let Some(source) = minijinja::path_loader(dir)(name)? {
                    return Ok(Some(source));
                }
            }
            Ok(None)
        });

        Ok(Self {
            name: config.name.clone(),
            env: Arc::new(env),
        })
    }
}

fn apply_options(env: &mut Environment<'static>, config: &EngineConfig) -> RenderResult<()> {
    if let Some(value) = config.options.get("undefined") {
        let behavior = match value.as_str() {
            Some("strict") => UndefinedBehavior::Strict,
            Some("chainable") => UndefinedBehavior::Chainable,
            Some("lenient") | None => UndefinedBehavior::Lenient,
            Some(other) => {
                return Err(RenderError::Configuration {
                    message: format!(
                        "engine '{}': unknown undefined behavior '{other}' \
                         (expected strict, chainable or lenient)",
                        config.name
                    ),
                });
            }
        };
        env.set_undefined_behavior(behavior);
    }
    Ok(())
}

impl TemplateBackend for MiniJinjaBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BackendKind {
        BackendKind::MiniJinja
    }

    fn get_template(&self, name: &str) -> RenderResult<Box<dyn TemplateHandle>> {
        match self.env.get_template(name) {
            Ok(_) => Ok(Box::new(MiniJinjaTemplate {
                engine: self.name.clone(),
                name: name.to_string(),
                env: self.env.clone(),
            })),
            Err(err) if err.kind() == ErrorKind::TemplateNotFound => {
                Err(TemplateNotFound::for_engine(name, &self.name).into())
            }
            Err(err) => Err(RenderError::Backend {
                engine: self.name.clone(),
                source: Box::new(err),
            }),
        }
    }
}

/// Loaded-template handle; renders through the shared environment.
#[derive(Debug)]
struct MiniJinjaTemplate {
    engine: String,
    name: String,
    env: Arc<Environment<'static>>,
}

impl TemplateHandle for MiniJinjaTemplate {
    fn engine(&self) -> &str {
        &self.engine
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, context: &RenderContext) -> RenderResult<String> {
        let template = self
            .env
            .get_template(&self.name)
            .map_err(|err| RenderError::Backend {
                engine: self.engine.clone(),
                source: Box::new(err),
            })?;
        template
            .render(Value::from_serialize(context))
            .map_err(|err| RenderError::Backend {
                engine: self.engine.clone(),
                source: Box::new(err),
            })
    }
}
