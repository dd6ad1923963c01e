//! Resolver services: the standalone and combined template resolvers.
//!
//! Both resolvers implement [`TemplateResolver`]; rendering is shared trait
//! behavior (load, render, trim) while template lookup differs:
//!
//! - [`StandaloneRenderer`] consults only the bundled template set and
//!   memoizes its engine once.
//! - [`CombinedRenderer`] tries the configured engines first (via
//!   [`lookup::get_template`]) and falls back to the standalone resolver on a
//!   not-found condition, merging the failure chains.

use std::sync::{Arc, OnceLock};

use tracing::{debug, instrument};

use crate::application::lookup::{self, BUNDLED_APP};
use crate::application::ports::{BackendFactory, TemplateBackend, TemplateHandle};
use crate::domain::{EngineConfig, RenderContext, SharedSettings, TemplateNotFound};
use crate::error::{RenderError, RenderResult};

/// Common resolver surface: look up a template, or load-and-render in one
/// step.
pub trait TemplateResolver {
    /// Look up a template by name.
    fn get_template(&self, name: &str) -> RenderResult<Box<dyn TemplateHandle>>;

    /// Load then render, trimming surrounding whitespace from the output.
    fn render(&self, name: &str, context: &RenderContext) -> RenderResult<String> {
        let template = self.get_template(name)?;
        Ok(template.render(context)?.trim().to_string())
    }
}

/// Resolver that only consults the bundled template set.
///
/// The underlying engine is chosen once — the factory's preferred backend
/// kind over the bundled directory for that kind — and memoized in a
/// `OnceLock` for the lifetime of this resolver.  A failed instantiation is
/// not cached; the next call retries.
pub struct StandaloneRenderer {
    factory: Arc<dyn BackendFactory>,
    engine: OnceLock<Arc<dyn TemplateBackend>>,
}

impl StandaloneRenderer {
    pub fn new(factory: Arc<dyn BackendFactory>) -> Self {
        Self {
            factory,
            engine: OnceLock::new(),
        }
    }

    /// The memoized bundled-template engine, instantiating it on first use.
    pub fn engine(&self) -> RenderResult<Arc<dyn TemplateBackend>> {
        if let Some(engine) = self.engine.get() {
            return Ok(engine.clone());
        }

        let kind = self.factory.preferred_kind();
        let config =
            EngineConfig::new(kind, BUNDLED_APP).with_dir(self.factory.bundled_dir(kind));
        debug!(backend = %kind, "instantiating bundled-template engine");
        let built = self.factory.instantiate(&config, &[])?;

        // A concurrent first use may have won the race; either way the stored
        // instance is the one returned from now on.
        Ok(self.engine.get_or_init(|| built).clone())
    }
}

impl TemplateResolver for StandaloneRenderer {
    #[instrument(skip(self))]
    fn get_template(&self, name: &str) -> RenderResult<Box<dyn TemplateHandle>> {
        self.engine()?.get_template(name)
    }
}

/// Resolver that tries the configured engines first, then falls back to the
/// bundled templates.
///
/// Only a not-found condition triggers the fallback; backend-internal and
/// configuration errors propagate unmodified.  When both halves miss, the
/// aggregate error's chain holds the configured engines' failures followed by
/// the standalone failure, in attempt order.
pub struct CombinedRenderer {
    factory: Arc<dyn BackendFactory>,
    settings: SharedSettings,
    standalone: StandaloneRenderer,
}

impl CombinedRenderer {
    pub fn new(factory: Arc<dyn BackendFactory>, settings: SharedSettings) -> Self {
        Self {
            standalone: StandaloneRenderer::new(factory.clone()),
            factory,
            settings,
        }
    }

    /// The shared settings this resolver reads (and patches) at lookup time.
    pub fn settings(&self) -> &SharedSettings {
        &self.settings
    }

    /// The bundled-template fallback resolver.
    pub fn standalone(&self) -> &StandaloneRenderer {
        &self.standalone
    }
}

impl TemplateResolver for CombinedRenderer {
    #[instrument(skip(self))]
    fn get_template(&self, name: &str) -> RenderResult<Box<dyn TemplateHandle>> {
        match lookup::get_template(name, &self.settings, self.factory.as_ref()) {
            Ok(handle) => Ok(handle),
            Err(RenderError::NotFound(configured)) => {
                debug!(template = name, "configured engines missed, trying bundled templates");
                match self.standalone.get_template(name) {
                    Ok(handle) => Ok(handle),
                    Err(RenderError::NotFound(standalone_miss)) => {
                        let mut chain = configured.chain;
                        chain.push(standalone_miss);
                        Err(TemplateNotFound::with_chain(name, chain).into())
                    }
                    Err(other) => Err(other),
                }
            }
            Err(other) => Err(other),
        }
    }
}
