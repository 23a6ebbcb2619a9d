//! Builder of error values.

use exf_core::{Cause, FromMessageAndCause};
use exf_message::{format, OneArgTemplate, TwoArgTemplate};

use crate::class::{ConstructionFailure, ConstructionFailureKind, ErrorClass};
use crate::error::BuildError;

/// Accumulates a message and a cause, then constructs a `T` from them.
///
/// The bound [`ErrorClass`] is fixed at creation and validated exactly
/// once. Each `set_*` call replaces the previously held value; a rejected
/// call leaves it untouched. [`build`](Self::build) can be called any
/// number of times, each call producing a fresh instance from the current
/// state.
///
/// A builder is a plain owned value: sharing one across threads requires
/// external locking.
#[derive(Debug)]
pub struct ExceptionBuilder<T> {
    class: ErrorClass<T>,
    message: Option<String>,
    cause: Option<Cause>,
}

impl<T: FromMessageAndCause> ExceptionBuilder<T> {
    /// Creates a builder for `T`, whose capability is checked at compile time.
    pub fn new() -> Self {
        Self::bound(ErrorClass::of())
    }
}

impl<T> Clone for ExceptionBuilder<T> {
    fn clone(&self) -> Self {
        ExceptionBuilder {
            class: self.class,
            message: self.message.clone(),
            cause: self.cause.clone(),
        }
    }
}

impl<T: FromMessageAndCause> Default for ExceptionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ExceptionBuilder<T> {
    /// Creates a builder for the type described by `class`.
    ///
    /// Fails with ``"`exceptionClass` is `null`"`` when `class` is absent,
    /// and with [`BuildError::UnsupportedType`] when the type has no
    /// `(message, cause)` constructor.
    pub fn of(class: impl Into<Option<ErrorClass<T>>>) -> Result<Self, BuildError> {
        let Some(class) = class.into() else {
            return Err(BuildError::invalid_argument("`exceptionClass` is `null`"));
        };
        if !class.has_message_and_cause_constructor() {
            return Err(BuildError::UnsupportedType {
                class: class.name(),
            });
        }
        Ok(Self::bound(class))
    }

    fn bound(class: ErrorClass<T>) -> Self {
        tracing::trace!(class = class.name(), "exception builder created");
        ExceptionBuilder {
            class,
            message: None,
            cause: None,
        }
    }

    /// The type this builder constructs.
    pub fn error_class(&self) -> &ErrorClass<T> {
        &self.class
    }

    /// The currently held message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The currently held cause.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Sets the message verbatim. It may be absent or empty.
    pub fn set_message<'a>(&mut self, message: impl Into<Option<&'a str>>) -> &mut Self {
        self.message = message.into().map(str::to_owned);
        self
    }

    /// Sets the message to `transform(arg)`.
    ///
    /// Fails when `transform` is absent; `arg` may be absent.
    pub fn set_message_from_transform<'a, F>(
        &mut self,
        transform: Option<F>,
        arg: impl Into<Option<&'a str>>,
    ) -> Result<&mut Self, BuildError>
    where
        F: FnOnce(Option<&str>) -> String,
    {
        let transform = transform.ok_or_else(|| BuildError::absent("messageBuilder"))?;
        self.message = Some(transform(arg.into()));
        Ok(self)
    }

    /// Sets the message to `transform(first, second)`.
    ///
    /// Fails when `transform` is absent; the arguments may be absent.
    pub fn set_message_from_bi_transform<'a, 'b, F>(
        &mut self,
        transform: Option<F>,
        first: impl Into<Option<&'a str>>,
        second: impl Into<Option<&'b str>>,
    ) -> Result<&mut Self, BuildError>
    where
        F: FnOnce(Option<&str>, Option<&str>) -> String,
    {
        let transform = transform.ok_or_else(|| BuildError::absent("messageBuilder"))?;
        self.message = Some(transform(first.into(), second.into()));
        Ok(self)
    }

    /// Sets the message by substituting `args` into the printf-style
    /// `formatted_string`.
    ///
    /// Fails when `formatted_string` is absent or malformed.
    pub fn set_message_formatted<'a>(
        &mut self,
        formatted_string: impl Into<Option<&'a str>>,
        args: &[Option<&str>],
    ) -> Result<&mut Self, BuildError> {
        let template = formatted_string
            .into()
            .ok_or_else(|| BuildError::absent("formattedString"))?;
        self.message = Some(format::format(template, args)?);
        Ok(self)
    }

    /// Sets the message by rendering a one-argument catalog template.
    ///
    /// Fails when `template` is absent; `arg` may be absent.
    pub fn set_message_from_template<'a>(
        &mut self,
        template: impl Into<Option<OneArgTemplate>>,
        arg: impl Into<Option<&'a str>>,
    ) -> Result<&mut Self, BuildError> {
        let template = template
            .into()
            .ok_or_else(|| BuildError::absent("messageTemplate"))?;
        self.message = Some(template.format(arg));
        Ok(self)
    }

    /// Sets the message by rendering a two-argument catalog template.
    ///
    /// Fails when `template` is absent; the arguments may be absent.
    pub fn set_message_from_two_arg_template<'a, 'b>(
        &mut self,
        template: impl Into<Option<TwoArgTemplate>>,
        first: impl Into<Option<&'a str>>,
        second: impl Into<Option<&'b str>>,
    ) -> Result<&mut Self, BuildError> {
        let template = template
            .into()
            .ok_or_else(|| BuildError::absent("messageTemplate"))?;
        self.message = Some(template.format(first, second));
        Ok(self)
    }

    /// Sets the cause. It may be absent.
    pub fn set_cause(&mut self, cause: impl Into<Option<Cause>>) -> &mut Self {
        self.cause = cause.into();
        self
    }

    /// Constructs a new `T` from the held message and cause.
    ///
    /// Fails with [`BuildError::Construction`] if the constructor cannot be
    /// found or reports a failure.
    #[tracing::instrument(level = "trace", skip_all, fields(class = self.class.name()))]
    pub fn build(&self) -> Result<T, BuildError> {
        let class = self.class.name();
        let constructor = self.class.constructor().ok_or_else(|| BuildError::Construction {
            class,
            failure: ConstructionFailure::new(ConstructionFailureKind::NotFound),
        })?;
        constructor(self.message.clone(), self.cause.clone())
            .map_err(|failure| BuildError::Construction { class, failure })
    }
}
