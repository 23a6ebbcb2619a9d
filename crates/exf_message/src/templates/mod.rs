//! Catalogs of preset message templates.
//!
//! Every template renders a code-quoted subject followed by a predicate:
//!
//! ```text
//! OneArgTemplate::MustNotBeNull.format("username")  // "`username` MUST NOT be `null`"
//! TwoArgTemplate::MustBeAtLeast.format("age", "18") // "`age` MUST be at least `18`"
//! ```
//!
//! Template names and phrasings are a stable contract: callers assert on
//! the rendered strings.

use std::fmt;
use std::sync::OnceLock;

use crate::builder::MessageBuilder;
use crate::format::{substitute, FormatType};
use crate::requirement_level::RequirementLevel::{self, Must, MustNot};

/// Template with ONE substitution slot: `` `<value>` <predicate> ``.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OneArgTemplate {
    /// ``"`example` MUST be `false`"``
    MustBeFalse,
    /// ``"`example` MUST be negative"``
    MustBeNegative,
    /// ``"`example` MUST be positive"``
    MustBePositive,
    /// ``"`example` MUST be `true`"``
    MustBeTrue,
    /// ``"`example` MUST be unique"``
    MustBeUnique,
    /// ``"`example` MUST be valid"``
    MustBeValid,
    /// ``"`example` MUST exist"``
    MustExist,
    /// ``"`example` MUST NOT be empty"``
    MustNotBeEmpty,
    /// ``"`example` MUST NOT be negative"``
    MustNotBeNegative,
    /// ``"`example` MUST NOT be `null`"``
    MustNotBeNull,
    /// ``"`example` MUST NOT be positive"``
    MustNotBePositive,
    /// ``"`example` MUST NOT exist"``
    MustNotExist,
}

/// Template with TWO substitution slots: `` `<v1>` <predicate> `<v2>` ``.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TwoArgTemplate {
    /// ``"`example` MUST be at least `42`"``
    MustBeAtLeast,
    /// ``"`example` MUST be at most `42`"``
    MustBeAtMost,
    /// ``"`example` MUST be equal to `42`"``
    MustBeEqualTo,
    /// ``"`example` MUST be greater than `42`"``
    MustBeGreaterThan,
    /// ``"`example` MUST be an instance of `Example`"``
    MustBeInstanceOf,
    /// ``"`example` MUST be less than `42`"``
    MustBeLessThan,
    /// ``"`example` MUST be of length `42`"``
    MustBeOfLength,
    /// ``"`example` MUST be of size `42`"``
    MustBeOfSize,
    /// ``"`example` MUST contain `ex`"``
    MustContain,
    /// ``"`example` MUST match RegEx `.*`"``
    MustMatchRegex,
    /// ``"`example` MUST NOT be equal to `example`"``
    MustNotBeEqualTo,
    /// ``"`example` MUST NOT be an instance of `Example`"``
    MustNotBeInstanceOf,
    /// ``"`example` MUST NOT contain `ex`"``
    MustNotContain,
}

impl OneArgTemplate {
    /// All templates, in declaration order.
    pub const ALL: &[OneArgTemplate] = &[
        OneArgTemplate::MustBeFalse,
        OneArgTemplate::MustBeNegative,
        OneArgTemplate::MustBePositive,
        OneArgTemplate::MustBeTrue,
        OneArgTemplate::MustBeUnique,
        OneArgTemplate::MustBeValid,
        OneArgTemplate::MustExist,
        OneArgTemplate::MustNotBeEmpty,
        OneArgTemplate::MustNotBeNegative,
        OneArgTemplate::MustNotBeNull,
        OneArgTemplate::MustNotBePositive,
        OneArgTemplate::MustNotExist,
    ];

    /// Constant-style name, e.g. `"MUST_NOT_BE_NULL"`.
    pub fn name(self) -> &'static str {
        match self {
            OneArgTemplate::MustBeFalse => "MUST_BE_FALSE",
            OneArgTemplate::MustBeNegative => "MUST_BE_NEGATIVE",
            OneArgTemplate::MustBePositive => "MUST_BE_POSITIVE",
            OneArgTemplate::MustBeTrue => "MUST_BE_TRUE",
            OneArgTemplate::MustBeUnique => "MUST_BE_UNIQUE",
            OneArgTemplate::MustBeValid => "MUST_BE_VALID",
            OneArgTemplate::MustExist => "MUST_EXIST",
            OneArgTemplate::MustNotBeEmpty => "MUST_NOT_BE_EMPTY",
            OneArgTemplate::MustNotBeNegative => "MUST_NOT_BE_NEGATIVE",
            OneArgTemplate::MustNotBeNull => "MUST_NOT_BE_NULL",
            OneArgTemplate::MustNotBePositive => "MUST_NOT_BE_POSITIVE",
            OneArgTemplate::MustNotExist => "MUST_NOT_EXIST",
        }
    }

    /// The raw format string, e.g. ``"`%s` MUST NOT be `null`"``.
    pub fn template(self) -> &'static str {
        &catalog().one_arg[self as usize]
    }

    /// Renders the template with `arg` as its subject.
    ///
    /// An absent `arg` renders as [`ABSENT`](crate::ABSENT).
    pub fn format<'a>(self, arg: impl Into<Option<&'a str>>) -> String {
        substitute(self.template(), &[arg.into()])
    }

    /// Requirement level, predicate words, and an optional code-quoted literal.
    fn predicate(self) -> (RequirementLevel, &'static str, Option<&'static str>) {
        match self {
            OneArgTemplate::MustBeFalse => (Must, "be", Some("false")),
            OneArgTemplate::MustBeNegative => (Must, "be negative", None),
            OneArgTemplate::MustBePositive => (Must, "be positive", None),
            OneArgTemplate::MustBeTrue => (Must, "be", Some("true")),
            OneArgTemplate::MustBeUnique => (Must, "be unique", None),
            OneArgTemplate::MustBeValid => (Must, "be valid", None),
            OneArgTemplate::MustExist => (Must, "exist", None),
            OneArgTemplate::MustNotBeEmpty => (MustNot, "be empty", None),
            OneArgTemplate::MustNotBeNegative => (MustNot, "be negative", None),
            OneArgTemplate::MustNotBeNull => (MustNot, "be", Some("null")),
            OneArgTemplate::MustNotBePositive => (MustNot, "be positive", None),
            OneArgTemplate::MustNotExist => (MustNot, "exist", None),
        }
    }

    fn compose(self) -> String {
        let (level, words, literal) = self.predicate();
        let mut message = subject().word(level).word(words);
        if let Some(literal) = literal {
            message = message.code_quote(literal);
        }
        message.to_string()
    }
}

impl TwoArgTemplate {
    /// All templates, in declaration order.
    pub const ALL: &[TwoArgTemplate] = &[
        TwoArgTemplate::MustBeAtLeast,
        TwoArgTemplate::MustBeAtMost,
        TwoArgTemplate::MustBeEqualTo,
        TwoArgTemplate::MustBeGreaterThan,
        TwoArgTemplate::MustBeInstanceOf,
        TwoArgTemplate::MustBeLessThan,
        TwoArgTemplate::MustBeOfLength,
        TwoArgTemplate::MustBeOfSize,
        TwoArgTemplate::MustContain,
        TwoArgTemplate::MustMatchRegex,
        TwoArgTemplate::MustNotBeEqualTo,
        TwoArgTemplate::MustNotBeInstanceOf,
        TwoArgTemplate::MustNotContain,
    ];

    /// Constant-style name, e.g. `"MUST_BE_AT_LEAST"`.
    pub fn name(self) -> &'static str {
        match self {
            TwoArgTemplate::MustBeAtLeast => "MUST_BE_AT_LEAST",
            TwoArgTemplate::MustBeAtMost => "MUST_BE_AT_MOST",
            TwoArgTemplate::MustBeEqualTo => "MUST_BE_EQUAL_TO",
            TwoArgTemplate::MustBeGreaterThan => "MUST_BE_GREATER_THAN",
            TwoArgTemplate::MustBeInstanceOf => "MUST_BE_INSTANCE_OF",
            TwoArgTemplate::MustBeLessThan => "MUST_BE_LESS_THAN",
            TwoArgTemplate::MustBeOfLength => "MUST_BE_OF_LENGTH",
            TwoArgTemplate::MustBeOfSize => "MUST_BE_OF_SIZE",
            TwoArgTemplate::MustContain => "MUST_CONTAIN",
            TwoArgTemplate::MustMatchRegex => "MUST_MATCH_REGEX",
            TwoArgTemplate::MustNotBeEqualTo => "MUST_NOT_BE_EQUAL_TO",
            TwoArgTemplate::MustNotBeInstanceOf => "MUST_NOT_BE_INSTANCE_OF",
            TwoArgTemplate::MustNotContain => "MUST_NOT_CONTAIN",
        }
    }

    /// The raw format string, e.g. ``"`%s` MUST be at least `%s`"``.
    pub fn template(self) -> &'static str {
        &catalog().two_arg[self as usize]
    }

    /// Renders the template with `first` as the subject and `second` as the
    /// object of the predicate.
    pub fn format<'a, 'b>(
        self,
        first: impl Into<Option<&'a str>>,
        second: impl Into<Option<&'b str>>,
    ) -> String {
        substitute(self.template(), &[first.into(), second.into()])
    }

    fn predicate(self) -> (RequirementLevel, &'static str) {
        match self {
            TwoArgTemplate::MustBeAtLeast => (Must, "be at least"),
            TwoArgTemplate::MustBeAtMost => (Must, "be at most"),
            TwoArgTemplate::MustBeEqualTo => (Must, "be equal to"),
            TwoArgTemplate::MustBeGreaterThan => (Must, "be greater than"),
            TwoArgTemplate::MustBeInstanceOf => (Must, "be an instance of"),
            TwoArgTemplate::MustBeLessThan => (Must, "be less than"),
            TwoArgTemplate::MustBeOfLength => (Must, "be of length"),
            TwoArgTemplate::MustBeOfSize => (Must, "be of size"),
            TwoArgTemplate::MustContain => (Must, "contain"),
            TwoArgTemplate::MustMatchRegex => (Must, "match RegEx"),
            TwoArgTemplate::MustNotBeEqualTo => (MustNot, "be equal to"),
            TwoArgTemplate::MustNotBeInstanceOf => (MustNot, "be an instance of"),
            TwoArgTemplate::MustNotContain => (MustNot, "contain"),
        }
    }

    fn compose(self) -> String {
        let (level, words) = self.predicate();
        subject()
            .word(level)
            .word(words)
            .code_quote(FormatType::String.specifier())
            .to_string()
    }
}

impl fmt::Display for OneArgTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

impl fmt::Display for TwoArgTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

/// Parses a template by its constant-style name.
impl std::str::FromStr for OneArgTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|template| template.name() == s)
            .copied()
            .ok_or(())
    }
}

/// Parses a template by its constant-style name.
impl std::str::FromStr for TwoArgTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|template| template.name() == s)
            .copied()
            .ok_or(())
    }
}

/// Composed format strings, indexed by discriminant.
struct Catalog {
    one_arg: [String; OneArgTemplate::ALL.len()],
    two_arg: [String; TwoArgTemplate::ALL.len()],
}

impl Catalog {
    fn compose() -> Self {
        Catalog {
            one_arg: std::array::from_fn(|i| OneArgTemplate::ALL[i].compose()),
            two_arg: std::array::from_fn(|i| TwoArgTemplate::ALL[i].compose()),
        }
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::compose)
}

/// The code-quoted substitution slot every template starts with.
fn subject() -> MessageBuilder {
    MessageBuilder::new().code_quote(FormatType::String.specifier())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
