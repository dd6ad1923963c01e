//! Configuration-merging template lookup.
//!
//! [`get_template`] is the configured-engines half of the combined resolver:
//! it patches the shared engine list so the bundled default templates are
//! reachable, then tries each configured engine in order, aggregating
//! not-found failures into one chained error when every engine misses.

use tracing::{debug, instrument, warn};

use crate::application::ports::{BackendFactory, TemplateHandle};
use crate::domain::{SharedSettings, TemplateNotFound};
use crate::error::{RenderError, RenderResult};

/// Name under which the bundled template set registers as an application.
///
/// When an application with this name appears in `installed_apps`, the
/// bundled templates are already reachable through app-directory discovery
/// and the patch pass does nothing (injecting the directory as well would
/// double-register it).
pub const BUNDLED_APP: &str = "formwork";

/// Resolve `name` through the configured engines, in configured order.
///
/// Before the first attempt, the bundled default template directory is
/// injected into the first eligible engine's search path (see
/// [`inject_bundled_dir`]); the mutation is in place on the shared settings.
///
/// # Errors
///
/// - [`RenderError::NotFound`] when every configured engine misses (or none
///   are configured); the cause chain holds each engine's failure in attempt
///   order.
/// - Any other error (instantiation failure, backend-internal error)
///   propagates immediately without trying further engines.
#[instrument(skip(settings, factory))]
pub fn get_template(
    name: &str,
    settings: &SharedSettings,
    factory: &dyn BackendFactory,
) -> RenderResult<Box<dyn TemplateHandle>> {
    inject_bundled_dir(settings, factory);

    let (engines, apps) = {
        let guard = settings.read().expect("settings lock poisoned");
        (guard.engines.clone(), guard.installed_apps.clone())
    };

    if engines.is_empty() {
        warn!("no template engines are configured");
    }

    let mut chain = Vec::new();
    for config in &engines {
        let backend = factory.instantiate(config, &apps)?;
        match backend.get_template(name) {
            Ok(handle) => {
                debug!(engine = %config.name, template = name, "template resolved");
                return Ok(handle);
            }
            Err(RenderError::NotFound(cause)) => {
                debug!(engine = %config.name, template = name, "miss, trying next engine");
                chain.push(cause);
            }
            Err(other) => return Err(other),
        }
    }

    Err(TemplateNotFound::with_chain(name, chain).into())
}

/// Patch pass: push the bundled default directory onto the search path of the
/// first engine that has app-directory auto-discovery enabled and does not
/// already list it.
///
/// An engine that already lists the directory is left untouched and later
/// engines are still considered; the pass stops only after an actual append,
/// so at most one engine is patched per call and repeated calls never add a
/// duplicate entry.
fn inject_bundled_dir(settings: &SharedSettings, factory: &dyn BackendFactory) {
    let mut guard = settings.write().expect("settings lock poisoned");
    if guard.app_installed(BUNDLED_APP) {
        return;
    }

    for config in guard.engines.iter_mut() {
        if !config.app_dirs {
            continue;
        }
        let bundled = factory.bundled_dir(config.backend);
        if !config.dirs.contains(&bundled) {
            debug!(
                engine = %config.name,
                dir = %bundled.display(),
                "injecting bundled template directory"
            );
            config.dirs.push(bundled);
            break;
        }
    }
}
