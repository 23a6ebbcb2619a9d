//! Core vocabulary for constructing error values from a message and a cause.
//!
//! Every error type the factory can build implements two traits:
//!
//! - [`FromMessageAndCause`]: the construction capability, the Rust
//!   counterpart of a `(message, cause)` constructor.
//! - [`Exception`]: read access to the message and cause an instance
//!   was built with.
//!
//! The [`exception_type!`] macro declares a struct implementing both,
//! together with `Display` and `std::error::Error`.
//!
//! ```text
//! exf_core::exception_type! {
//!     /// Raised when a quota is exhausted.
//!     pub struct QuotaExceeded;
//! }
//!
//! let message = Some("`quota` MUST be positive".to_owned());
//! let error = QuotaExceeded::from_message_and_cause(message, None);
//! assert_eq!(error.message(), Some("`quota` MUST be positive"));
//! ```

mod exception;
mod kinds;

pub use exception::{into_cause, Cause, Exception, FromMessageAndCause};
pub use kinds::{IllegalArgument, IllegalState, UnsupportedOperation};
