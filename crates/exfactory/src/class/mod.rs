//! Runtime descriptors of constructible error types.
//!
//! An [`ErrorClass`] names an error type and, if the type supports it,
//! carries the function that constructs it from `(message, cause)`.
//! [`ExceptionBuilder::of`](crate::ExceptionBuilder::of) probes the
//! descriptor once and refuses types without a constructor.

use std::fmt;

use exf_core::{Cause, FromMessageAndCause};
use thiserror::Error;

/// Constructs a `T` from an optional message and an optional cause.
pub type Constructor<T> = fn(Option<String>, Option<Cause>) -> Result<T, ConstructionFailure>;

/// Descriptor of an error type the builder may be bound to.
pub struct ErrorClass<T> {
    name: &'static str,
    constructor: Option<Constructor<T>>,
}

impl<T: FromMessageAndCause> ErrorClass<T> {
    /// Describes `T` using its [`FromMessageAndCause`] implementation.
    pub fn of() -> Self {
        ErrorClass {
            name: std::any::type_name::<T>(),
            constructor: Some(construct::<T>),
        }
    }
}

impl<T> ErrorClass<T> {
    /// Describes a type constructed by a registered factory function.
    ///
    /// Unlike [`ErrorClass::of`], the function may fail; its failure is
    /// surfaced by `build()` as a construction error.
    pub fn with_constructor(name: &'static str, constructor: Constructor<T>) -> Self {
        ErrorClass {
            name,
            constructor: Some(constructor),
        }
    }

    /// Describes a type known by name only, without a `(message, cause)`
    /// constructor. Builders refuse to bind to it.
    pub fn without_constructor(name: &'static str) -> Self {
        ErrorClass {
            name,
            constructor: None,
        }
    }

    /// The type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the type can be constructed from `(message, cause)`.
    pub fn has_message_and_cause_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    pub(crate) fn constructor(&self) -> Option<Constructor<T>> {
        self.constructor
    }
}

impl<T> Clone for ErrorClass<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ErrorClass<T> {}

impl<T> fmt::Debug for ErrorClass<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorClass")
            .field("name", &self.name)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}

fn construct<T: FromMessageAndCause>(
    message: Option<String>,
    cause: Option<Cause>,
) -> Result<T, ConstructionFailure> {
    Ok(T::from_message_and_cause(message, cause))
}

/// Why constructing an error value failed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConstructionFailureKind {
    /// No `(message, cause)` constructor was found at build time.
    NotFound,
    /// The constructor ran and reported a failure.
    InvocationFailed,
    /// The type cannot be instantiated.
    InstantiationFailed,
    /// The constructor exists but may not be called.
    AccessDenied,
}

impl ConstructionFailureKind {
    /// All kinds, in declaration order.
    pub const ALL: &[ConstructionFailureKind] = &[
        ConstructionFailureKind::NotFound,
        ConstructionFailureKind::InvocationFailed,
        ConstructionFailureKind::InstantiationFailed,
        ConstructionFailureKind::AccessDenied,
    ];

    /// Diagnostic label, e.g. `"invocation-failed"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ConstructionFailureKind::NotFound => "not-found",
            ConstructionFailureKind::InvocationFailed => "invocation-failed",
            ConstructionFailureKind::InstantiationFailed => "instantiation-failed",
            ConstructionFailureKind::AccessDenied => "access-denied",
        }
    }
}

impl fmt::Display for ConstructionFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a [`Constructor`].
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ConstructionFailure {
    /// What went wrong.
    pub kind: ConstructionFailureKind,
    /// The underlying failure, if any.
    #[source]
    pub source: Option<Cause>,
}

impl ConstructionFailure {
    /// A failure without an underlying cause.
    pub fn new(kind: ConstructionFailureKind) -> Self {
        ConstructionFailure { kind, source: None }
    }

    /// A failure caused by `source`.
    pub fn with_source(kind: ConstructionFailureKind, source: Cause) -> Self {
        ConstructionFailure {
            kind,
            source: Some(source),
        }
    }
}
