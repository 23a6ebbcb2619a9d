//! Failures of builder and factory operations.

use exf_core::{FromMessageAndCause, IllegalArgument};
use exf_message::{FormatError, OneArgTemplate};
use thiserror::Error;

use crate::class::{ConstructionFailure, ConstructionFailureKind};

/// Error returned by [`ExceptionBuilder`](crate::ExceptionBuilder) and the
/// [`factory`](crate::factory) functions.
#[derive(Debug, Clone, Error)]
pub enum BuildError {
    /// A required argument was absent.
    #[error(transparent)]
    InvalidArgument(#[from] IllegalArgument),

    /// The error type cannot be constructed from `(message, cause)`.
    #[error("`exceptionClass` does NOT have a (`String, Throwable`) constructor")]
    UnsupportedType {
        /// Name of the rejected type.
        class: &'static str,
    },

    /// A printf-style message could not be rendered.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Constructing the error value failed at build time.
    ///
    /// Fatal: it indicates a defect in the error type or its registered
    /// constructor, never a transient condition.
    #[error("failed to construct `{class}`: {failure}")]
    Construction {
        /// Name of the type being constructed.
        class: &'static str,
        /// The reported failure, which carries the original cause.
        #[source]
        failure: ConstructionFailure,
    },
}

impl BuildError {
    /// Whether this is a construction failure rather than caller misuse.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BuildError::Construction { .. })
    }

    /// The kind of construction failure, if this is one.
    pub fn construction_kind(&self) -> Option<ConstructionFailureKind> {
        match self {
            BuildError::Construction { failure, .. } => Some(failure.kind),
            _ => None,
        }
    }

    /// An invalid-argument error carrying `message` verbatim.
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        BuildError::InvalidArgument(IllegalArgument::from_message_and_cause(
            Some(message.into()),
            None,
        ))
    }

    /// Invalid-argument error for an absent required `parameter`.
    pub(crate) fn absent(parameter: &str) -> Self {
        Self::invalid_argument(OneArgTemplate::MustNotBeNull.format(parameter))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
