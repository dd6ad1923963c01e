//! Unified error handling for Formwork Core.
//!
//! [`RenderError`] is the root error type for template resolution and
//! rendering.  Only the `NotFound` variant participates in engine fallback;
//! backend-internal failures (template syntax, I/O inside the engine) and
//! configuration failures propagate to the caller unmodified.

use thiserror::Error;

use crate::domain::TemplateNotFound;

/// Root error type for template resolution and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template was not found by any attempted engine.  The inner error
    /// carries the per-engine cause chain.
    #[error(transparent)]
    NotFound(#[from] TemplateNotFound),

    /// A backend-internal failure (e.g. template syntax error).  Never caught
    /// by the resolvers.
    #[error("backend error in engine '{engine}': {source}")]
    Backend {
        engine: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An engine could not be instantiated from its descriptor.
    #[error("engine configuration error: {message}")]
    Configuration { message: String },
}

impl RenderError {
    /// True when this is a not-found condition (the only kind the combined
    /// resolver falls back on).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::Backend { .. } => ErrorCategory::Backend,
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound(err) => {
                let mut out = vec![format!("Template \"{}\" was not found", err.name)];
                if err.chain.is_empty() {
                    out.push("Check the template name and your engine configuration".into());
                } else {
                    out.push(format!("{} engine(s) were tried in order", err.chain.len()));
                    out.push("Add the template to one of the configured directories".into());
                }
                out
            }
            Self::Backend { engine, .. } => vec![
                format!("Engine '{engine}' failed while handling the template"),
                "This is usually a template syntax error; check the template source".into(),
            ],
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check the engine's directories and options".into(),
            ],
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Backend,
    Configuration,
}

/// Convenient result type alias.
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_transparent() {
        let err: RenderError = TemplateNotFound::new("x.html").into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "template \"x.html\" not found");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn backend_errors_are_not_not_found() {
        let err = RenderError::Backend {
            engine: "app".into(),
            source: "boom".into(),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.category(), ErrorCategory::Backend);
        assert!(err.to_string().contains("app"));
    }

    #[test]
    fn suggestions_mention_attempted_engine_count() {
        let err: RenderError = TemplateNotFound::with_chain(
            "x.html",
            vec![
                TemplateNotFound::for_engine("x.html", "a"),
                TemplateNotFound::for_engine("x.html", "b"),
            ],
        )
        .into();

        let text = err.suggestions().join("\n");
        assert!(text.contains("2 engine(s)"));
    }
}
