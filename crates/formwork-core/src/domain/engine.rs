//! Engine descriptors and the installed-application registry.
//!
//! An [`EngineConfig`] identifies one configured templating backend: which
//! backend implementation to use, where it searches for templates, whether it
//! auto-discovers installed applications' own template directories, and any
//! backend-specific options.  Descriptors are plain data; instantiation is the
//! job of a [`BackendFactory`](crate::application::ports::BackendFactory).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The closed set of supported templating backends.
///
/// Engines are selected by variant, not by string name, so an unknown backend
/// is a deserialization error rather than a runtime lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Jinja2-compatible backend built on the `minijinja` crate.
    MiniJinja,
    /// Backend built on the `tera` crate.
    Tera,
}

impl BackendKind {
    /// Stable lowercase label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MiniJinja => "minijinja",
            Self::Tera => "tera",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured templating engine.
///
/// Engines are tried in the order they appear in
/// [`TemplateSettings::engines`](crate::domain::TemplateSettings); the first
/// engine that knows a template wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which backend implements this engine.
    pub backend: BackendKind,

    /// Instance name, unique within one settings list.  Surfaces in error
    /// chains and logs so a miss can be attributed to an engine.
    pub name: String,

    /// Explicit template search directories, highest priority first.
    #[serde(default)]
    pub dirs: Vec<PathBuf>,

    /// Backend directory auto-discovery: when true the instantiated backend
    /// also searches each installed application's own template subdirectory.
    #[serde(default)]
    pub app_dirs: bool,

    /// Backend-specific options, passed through opaquely.  Each backend
    /// documents the keys it honors and ignores the rest.
    #[serde(default)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

impl EngineConfig {
    /// Create a descriptor with no search directories, auto-discovery off and
    /// empty options.
    pub fn new(backend: BackendKind, name: impl Into<String>) -> Self {
        Self {
            backend,
            name: name.into(),
            dirs: Vec::new(),
            app_dirs: false,
            options: serde_json::Map::new(),
        }
    }

    /// Add a search directory (builder style).
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.push(dir.into());
        self
    }

    /// Enable or disable app-directory auto-discovery (builder style).
    pub fn with_app_dirs(mut self, enabled: bool) -> Self {
        self.app_dirs = enabled;
        self
    }

    /// Set one backend-specific option (builder style).
    pub fn with_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// One entry of the installed-application registry.
///
/// Applications that ship their own templates register here; engines with
/// [`EngineConfig::app_dirs`] enabled search each application's template
/// subdirectory after their explicit `dirs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledApp {
    /// Application name (e.g. `"blog"`).
    pub name: String,
    /// Application root directory; the backend appends its own flavor
    /// subdirectory when discovering templates.
    pub path: PathBuf,
}

impl InstalledApp {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
