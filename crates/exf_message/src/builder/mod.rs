//! Word-by-word message composition.

use std::fmt;

use exf_core::{FromMessageAndCause, IllegalArgument};

use crate::format::FormatType;
use crate::templates::OneArgTemplate;

/// Composes a message, or a template's format string, from words joined by
/// single spaces in the order they were added.
///
/// Each `add*` method consumes and returns the builder so calls chain with
/// `?`. Rendering through `Display` (or [`MessageBuilder::build`]) does not
/// change the accumulated words.
///
/// ```text
/// let message = MessageBuilder::new()
///     .add("a")?
///     .add_code_quote("b")?
///     .add_format_specifier(FormatType::String)?;
/// assert_eq!(message.to_string(), "a `b` %s");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageBuilder {
    words: Vec<String>,
}

impl MessageBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the string form of `value`.
    ///
    /// Fails when `value` is absent.
    pub fn add<T: fmt::Display>(
        self,
        value: impl Into<Option<T>>,
    ) -> Result<Self, IllegalArgument> {
        match value.into() {
            Some(value) => Ok(self.word(value)),
            None => Err(absent("object")),
        }
    }

    /// Appends the string form of `value` wrapped in backticks.
    ///
    /// Fails when `value` is absent.
    pub fn add_code_quote<T: fmt::Display>(
        self,
        value: impl Into<Option<T>>,
    ) -> Result<Self, IllegalArgument> {
        match value.into() {
            Some(value) => Ok(self.code_quote(value)),
            None => Err(absent("object")),
        }
    }

    /// Appends the placeholder for values of `format_type`: `%d`, `%f` or `%s`.
    ///
    /// Fails when `format_type` is absent.
    pub fn add_format_specifier(
        self,
        format_type: impl Into<Option<FormatType>>,
    ) -> Result<Self, IllegalArgument> {
        match format_type.into() {
            Some(format_type) => Ok(self.word(format_type.specifier())),
            None => Err(absent("formatClass")),
        }
    }

    /// The words added so far.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Renders the accumulated words, space-separated.
    pub fn build(&self) -> String {
        self.words.join(" ")
    }

    pub(crate) fn word(mut self, value: impl fmt::Display) -> Self {
        self.words.push(value.to_string());
        self
    }

    pub(crate) fn code_quote(self, value: impl fmt::Display) -> Self {
        self.word(format_args!("`{value}`"))
    }
}

impl fmt::Display for MessageBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

fn absent(parameter: &str) -> IllegalArgument {
    IllegalArgument::from_message_and_cause(
        Some(OneArgTemplate::MustNotBeNull.format(parameter)),
        None,
    )
}
