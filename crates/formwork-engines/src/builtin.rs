//! Bundled default template discovery.
//!
//! The widget templates that ship with Formwork live inside this crate, one
//! directory per backend flavor:
//!
//! ```text
//! formwork-engines/
//! ├── templates/formwork/widgets/*.html   ← Tera flavor
//! └── jinja/formwork/widgets/*.html       ← MiniJinja flavor
//! ```
//!
//! [`template_root`] resolves the directory for a backend kind.  The
//! `$FORMWORK_TEMPLATES_DIR` environment variable overrides the base
//! directory (point it at a custom copy of both flavor subdirectories);
//! otherwise the directory compiled into the crate is used.
//!
//! Relative override paths are resolved against the current working directory
//! at call time.

use std::path::PathBuf;

use tracing::debug;

use formwork_core::domain::BackendKind;

/// Environment variable overriding the bundled template base directory.
pub const ENV_TEMPLATES_DIR: &str = "FORMWORK_TEMPLATES_DIR";

/// Flavor subdirectory for a backend kind.
///
/// Tera reads the `templates/` tree; MiniJinja reads the `jinja/` tree.  The
/// same split applies to installed applications' own template directories
/// during app-dir discovery.
pub fn flavor_dir(kind: BackendKind) -> &'static str {
    match kind {
        BackendKind::MiniJinja => "jinja",
        BackendKind::Tera => "templates",
    }
}

/// The bundled default template directory for a backend kind.
pub fn template_root(kind: BackendKind) -> PathBuf {
    let base = match std::env::var_os(ENV_TEMPLATES_DIR) {
        Some(dir) => {
            let p = PathBuf::from(dir);
            debug!(path = %p.display(), "bundled template base from $FORMWORK_TEMPLATES_DIR");
            p
        }
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")),
    };
    base.join(flavor_dir(kind))
}
