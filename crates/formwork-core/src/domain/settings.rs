//! Process-wide template settings.
//!
//! [`TemplateSettings`] is the configured engine list plus the
//! installed-application registry.  It is consumed as-is: this crate never
//! loads or merges configuration sources (the engines crate ships a thin TOML
//! loader for hosts that want one).
//!
//! The settings are shared as an explicit [`SharedSettings`] handle rather
//! than a process global.  The configuration-merging lookup patches the engine
//! list in place (it may inject the bundled template directory), so the handle
//! wraps an `RwLock`.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use super::engine::{EngineConfig, InstalledApp};

/// Engine configuration and installed-application registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateSettings {
    /// Configured engines, tried in order.
    #[serde(default)]
    pub engines: Vec<EngineConfig>,

    /// Installed applications whose template subdirectories are discovered by
    /// engines with `app_dirs` enabled.
    #[serde(default)]
    pub installed_apps: Vec<InstalledApp>,
}

impl TemplateSettings {
    /// Settings with no engines and no installed applications.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an application with the given name is registered.
    pub fn app_installed(&self, name: &str) -> bool {
        self.installed_apps.iter().any(|app| app.name == name)
    }

    /// Wrap these settings in a shareable handle.
    pub fn into_shared(self) -> SharedSettings {
        Arc::new(RwLock::new(self))
    }
}

/// Shared, mutable settings handle passed through call sites.
///
/// Lock poisoning is treated as unrecoverable: a panic while holding the
/// write lock leaves the engine list in an unknown state.
pub type SharedSettings = Arc<RwLock<TemplateSettings>>;
