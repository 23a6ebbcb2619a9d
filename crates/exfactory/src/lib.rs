//! Construction of error values with standardized, templated messages.
//!
//! [`ExceptionBuilder`] produces an instance of any error type that supports
//! construction from `(message, cause)`, with the message rendered from a
//! catalog template, a transform, a printf-style format string, or given
//! verbatim:
//!
//! ```text
//! let error = ExceptionBuilder::<IllegalArgument>::new()
//!     .set_message_from_template(OneArgTemplate::MustNotBeNull, "username")?
//!     .build()?;
//! assert_eq!(error.to_string(), "`username` MUST NOT be `null`");
//! ```
//!
//! The [`factory`] functions cover the two most common kinds:
//!
//! ```text
//! let error = illegal_argument_of("age", OneArgTemplate::MustBePositive)?;
//! ```
//!
//! Construction errors are returned, never logged. Builder lifecycle events
//! are emitted as `trace`-level `tracing` events; see [`init_tracing`].

mod builder;
mod class;
mod error;
pub mod factory;

use std::sync::Once;

pub use builder::ExceptionBuilder;
pub use class::{ConstructionFailure, ConstructionFailureKind, Constructor, ErrorClass};
pub use error::BuildError;
pub use exf_core::{
    exception_type, into_cause, Cause, Exception, FromMessageAndCause, IllegalArgument,
    IllegalState, UnsupportedOperation,
};
pub use exf_message::{
    format, FormatError, FormatType, MessageBuilder, OneArgTemplate, RequirementLevel,
    TwoArgTemplate, ABSENT,
};
pub use factory::{
    illegal_argument_of, illegal_argument_of_value, illegal_state_of, illegal_state_of_value,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=exfactory=trace`. Does nothing if another global
/// subscriber is already installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
                .ok();
        }
    });
}
