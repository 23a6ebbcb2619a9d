//! Standardized error messages.
//!
//! Two closed catalogs of message templates, [`OneArgTemplate`] and
//! [`TwoArgTemplate`], render sentences such as
//! ``"`username` MUST NOT be `null`"`` or ``"`age` MUST be at least `18`"``.
//! Each catalog string is composed once from [`RequirementLevel`] keywords,
//! literal words and code-quoted format specifiers using [`MessageBuilder`].
//!
//! The [`format`](format::format) engine implements the printf-style subset
//! used for ad hoc messages.

mod builder;
pub mod format;
mod requirement_level;
mod templates;

pub use builder::MessageBuilder;
pub use format::{FormatError, FormatType, ABSENT};
pub use requirement_level::RequirementLevel;
pub use templates::{OneArgTemplate, TwoArgTemplate};
