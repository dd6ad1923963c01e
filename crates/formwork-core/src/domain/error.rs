//! Not-found error with a cause chain.

use std::fmt;

/// A template could not be found.
///
/// Carries an ordered `chain` of the underlying not-found failures from each
/// attempted engine, so a miss across several configured engines surfaces as
/// one aggregate error that still names every engine that was tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNotFound {
    /// The requested template name.
    pub name: String,
    /// The engine that reported the miss, when a single engine did.
    pub engine: Option<String>,
    /// Underlying not-found failures, in attempt order.
    pub chain: Vec<TemplateNotFound>,
}

impl TemplateNotFound {
    /// A miss with no attributed engine and no chain.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            engine: None,
            chain: Vec::new(),
        }
    }

    /// A miss reported by one named engine.
    pub fn for_engine(name: impl Into<String>, engine: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            engine: Some(engine.into()),
            chain: Vec::new(),
        }
    }

    /// An aggregate miss wrapping the failures of every attempted engine.
    pub fn with_chain(name: impl Into<String>, chain: Vec<TemplateNotFound>) -> Self {
        Self {
            name: name.into(),
            engine: None,
            chain,
        }
    }

    /// The underlying failures, in attempt order.
    pub fn attempted(&self) -> &[TemplateNotFound] {
        &self.chain
    }
}

impl fmt::Display for TemplateNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template \"{}\" not found", self.name)?;
        if let Some(engine) = &self.engine {
            write!(f, " (engine: {engine})")?;
        }
        if !self.chain.is_empty() {
            write!(f, "; tried:")?;
            for cause in &self.chain {
                write!(f, "\n  - {cause}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for TemplateNotFound {}
