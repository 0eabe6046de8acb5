use std::fmt;

/// Convenience result type used across strokeorder.
pub type StrokesResult<T> = Result<T, StrokesError>;

/// One broken rule on one named option field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Field name as it appears in [`crate::PartialAnimationOptions`].
    pub field: &'static str,
    /// Human-readable rule that was broken (for example `"is not < 1"`).
    pub message: String,
}

impl Violation {
    /// Build a violation for `field`.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// What kind of identifier could not be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapabilityKind {
    /// Animation output format (`canvas-2d`, `svg-css`, ...).
    Format,
    /// Stroke data source (`zh`, `ja`, ...).
    Source,
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => f.write_str("format"),
            Self::Source => f.write_str("source"),
        }
    }
}

/// Top-level error taxonomy used by strokeorder APIs.
#[derive(thiserror::Error, Debug)]
pub enum StrokesError {
    /// Invalid options; carries every violation found, not only the first.
    #[error("validation error: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    /// Unknown format or source identifier.
    #[error("unsupported {kind}: \"{name}\"")]
    Unsupported {
        /// Which registry lookup failed.
        kind: CapabilityKind,
        /// The identifier that was requested.
        name: String,
    },

    /// Stroke data could not be fetched or parsed for one source.
    #[error("source error ({source_id}): {message}")]
    Source {
        /// Source identifier the failure is attributed to.
        source_id: String,
        /// Failure detail.
        message: String,
    },

    /// Path, transform or view box data that cannot be interpreted.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Rendering surface could not be created or drawn.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl StrokesError {
    /// Build a [`StrokesError::Validation`] holding a single violation.
    pub fn validation(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation(vec![Violation::new(field, msg)])
    }

    /// Build a [`StrokesError::Unsupported`] for a format identifier.
    pub fn unsupported_format(name: impl Into<String>) -> Self {
        Self::Unsupported {
            kind: CapabilityKind::Format,
            name: name.into(),
        }
    }

    /// Build a [`StrokesError::Unsupported`] for a source identifier.
    pub fn unsupported_source(name: impl Into<String>) -> Self {
        Self::Unsupported {
            kind: CapabilityKind::Source,
            name: name.into(),
        }
    }

    /// Build a [`StrokesError::Source`] value.
    pub fn source(source_id: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_id: source_id.into(),
            message: msg.into(),
        }
    }

    /// Build a [`StrokesError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`StrokesError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Violations carried by a validation error; empty for every other variant.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Validation(v) => v,
            _ => &[],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
