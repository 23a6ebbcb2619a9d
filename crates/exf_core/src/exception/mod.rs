//! Message-and-cause construction contract.

use std::error::Error;
use std::sync::Arc;

/// Underlying cause chained to a constructed error.
///
/// Shared so that repeated builds from the same builder hand out the same
/// cause instance.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Wraps any error as a [`Cause`].
pub fn into_cause<E>(error: E) -> Cause
where
    E: Error + Send + Sync + 'static,
{
    Arc::new(error)
}

/// Capability of building `Self` from an optional message and an optional cause.
///
/// Types without this implementation cannot be handed to the compile-time
/// builder path; the runtime path reports them as unsupported.
pub trait FromMessageAndCause: Sized {
    /// Constructs a new instance holding exactly `message` and `cause`.
    fn from_message_and_cause(message: Option<String>, cause: Option<Cause>) -> Self;
}

/// An error value carrying the message and cause it was constructed with.
pub trait Exception: Error + Send + Sync + 'static {
    /// The message, if one was set.
    fn message(&self) -> Option<&str>;

    /// The chained cause, if one was set.
    ///
    /// Unlike `source()`, this returns the shared [`Cause`] handle itself.
    fn chained_cause(&self) -> Option<&Cause>;
}

/// Declares an error struct constructible from `(message, cause)`.
///
/// The generated type implements [`FromMessageAndCause`], [`Exception`],
/// `Display` (the message, or the type name when absent), and
/// `std::error::Error` with the cause as `source()`.
#[macro_export]
macro_rules! exception_type {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            message: ::std::option::Option<::std::string::String>,
            cause: ::std::option::Option<$crate::Cause>,
        }

        impl $crate::FromMessageAndCause for $name {
            fn from_message_and_cause(
                message: ::std::option::Option<::std::string::String>,
                cause: ::std::option::Option<$crate::Cause>,
            ) -> Self {
                Self { message, cause }
            }
        }

        impl $crate::Exception for $name {
            fn message(&self) -> ::std::option::Option<&str> {
                self.message.as_deref()
            }

            fn chained_cause(&self) -> ::std::option::Option<&$crate::Cause> {
                self.cause.as_ref()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match &self.message {
                    ::std::option::Option::Some(message) => f.write_str(message),
                    ::std::option::Option::None => f.write_str(stringify!($name)),
                }
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                self.cause
                    .as_ref()
                    .map(|cause| &**cause as &(dyn ::std::error::Error + 'static))
            }
        }
    };
}
