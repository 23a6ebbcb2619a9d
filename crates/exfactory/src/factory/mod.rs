//! Shorthands for the two most common error kinds.
//!
//! Each function renders a catalog template and returns the constructed
//! error. Raising it is left to the caller.

use exf_core::{FromMessageAndCause, IllegalArgument, IllegalState};
use exf_message::{OneArgTemplate, TwoArgTemplate};

use crate::{BuildError, ExceptionBuilder};

/// An [`IllegalArgument`] whose message is `template.format(key)`.
///
/// ```text
/// illegal_argument_of("username", OneArgTemplate::MustNotBeNull)?
/// // "`username` MUST NOT be `null`"
/// ```
pub fn illegal_argument_of<'a>(
    key: impl Into<Option<&'a str>>,
    template: impl Into<Option<OneArgTemplate>>,
) -> Result<IllegalArgument, BuildError> {
    of_key(key, template)
}

/// An [`IllegalArgument`] whose message is `template.format(key, value)`.
pub fn illegal_argument_of_value<'a, 'b>(
    key: impl Into<Option<&'a str>>,
    template: impl Into<Option<TwoArgTemplate>>,
    value: impl Into<Option<&'b str>>,
) -> Result<IllegalArgument, BuildError> {
    of_key_and_value(key, template, value)
}

/// An [`IllegalState`] whose message is `template.format(key)`.
pub fn illegal_state_of<'a>(
    key: impl Into<Option<&'a str>>,
    template: impl Into<Option<OneArgTemplate>>,
) -> Result<IllegalState, BuildError> {
    of_key(key, template)
}

/// An [`IllegalState`] whose message is `template.format(key, value)`.
pub fn illegal_state_of_value<'a, 'b>(
    key: impl Into<Option<&'a str>>,
    template: impl Into<Option<TwoArgTemplate>>,
    value: impl Into<Option<&'b str>>,
) -> Result<IllegalState, BuildError> {
    of_key_and_value(key, template, value)
}

fn of_key<'a, T: FromMessageAndCause>(
    key: impl Into<Option<&'a str>>,
    template: impl Into<Option<OneArgTemplate>>,
) -> Result<T, BuildError> {
    ExceptionBuilder::<T>::new()
        .set_message_from_template(template, key)?
        .build()
}

fn of_key_and_value<'a, 'b, T: FromMessageAndCause>(
    key: impl Into<Option<&'a str>>,
    template: impl Into<Option<TwoArgTemplate>>,
    value: impl Into<Option<&'b str>>,
) -> Result<T, BuildError> {
    ExceptionBuilder::<T>::new()
        .set_message_from_two_arg_template(template, key, value)?
        .build()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
