//! TOML settings loading.
//!
//! Hosts that keep their engine configuration in a file can load a
//! [`TemplateSettings`] from TOML.  There is no merging of sources: the first
//! readable candidate wins, and the parsed settings are consumed as-is.
//!
//! # Resolution order
//!
//! 1. **`$FORMWORK_CONFIG`** — explicit path override.
//! 2. **`./formwork.toml`** — relative to the current working directory.
//!
//! If neither exists, [`load`] returns default (empty) settings; the combined
//! resolver then serves everything from the bundled templates.
//!
//! # Format
//!
//! ```toml
//! [[engines]]
//! backend  = "minijinja"
//! name     = "app"
//! dirs     = ["templates/jinja"]
//! app_dirs = true
//!
//! [engines.options]
//! undefined = "strict"
//!
//! [[installed_apps]]
//! name = "blog"
//! path = "apps/blog"
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use formwork_core::domain::TemplateSettings;
use formwork_core::error::{RenderError, RenderResult};

/// Environment variable pointing at a settings file.
pub const ENV_CONFIG: &str = "FORMWORK_CONFIG";

/// Default settings file name, resolved against the current directory.
pub const DEFAULT_FILE: &str = "formwork.toml";

/// Load settings from the first existing candidate path, or defaults when no
/// candidate exists.
///
/// # Errors
///
/// Returns [`RenderError::Configuration`] when a candidate exists but cannot
/// be read or parsed — a present-but-broken file must not be silently
/// replaced by defaults.
#[instrument]
pub fn load() -> RenderResult<TemplateSettings> {
    for candidate in candidate_paths() {
        if candidate.exists() {
            debug!(path = %candidate.display(), "loading template settings");
            return from_path(&candidate);
        }
        debug!(path = %candidate.display(), "no settings file, trying next candidate");
    }
    Ok(TemplateSettings::default())
}

/// Parse settings from a TOML file.
pub fn from_path(path: &Path) -> RenderResult<TemplateSettings> {
    let raw = std::fs::read_to_string(path).map_err(|err| RenderError::Configuration {
        message: format!("failed to read '{}': {err}", path.display()),
    })?;
    from_toml_str(&raw).map_err(|err| match err {
        RenderError::Configuration { message } => RenderError::Configuration {
            message: format!("in '{}': {message}", path.display()),
        },
        other => other,
    })
}

/// Parse settings from a TOML string.
pub fn from_toml_str(raw: &str) -> RenderResult<TemplateSettings> {
    toml::from_str(raw).map_err(|err| RenderError::Configuration {
        message: format!("failed to parse settings: {err}"),
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(env_path) = std::env::var_os(ENV_CONFIG) {
        paths.push(PathBuf::from(env_path));
    }
    paths.push(PathBuf::from(DEFAULT_FILE));
    paths
}
