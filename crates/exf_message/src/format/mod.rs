//! printf-style message formatting.
//!
//! A specifier has the shape `%[index$][-|0][width][.precision]conversion`:
//!
//! | conversion | renders                                               |
//! |------------|-------------------------------------------------------|
//! | `s` / `S`  | the argument (upper-cased for `S`)                    |
//! | `d`        | the argument parsed as an integer                     |
//! | `f`        | the argument parsed as a float, `precision` decimals  |
//! | `b`        | `false` when absent, `true` otherwise                 |
//! | `n`        | a newline, consumes no argument                       |
//! | `%`        | a literal `%`, consumes no argument                   |
//!
//! Arguments are optional strings; an absent argument renders as [`ABSENT`].
//! Explicit indices are 1-based and do not advance the implicit index.
//! Surplus arguments are ignored. The `0` flag pads `d` and `f` with zeros
//! after the sign; width and precision are capped at [`MAX_FIELD`].

use std::any::TypeId;
use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

/// Rendering of an absent substitution value.
pub const ABSENT: &str = "null";

/// Largest width or precision a specifier may request.
pub const MAX_FIELD: usize = 4096;

/// Default number of decimals for `%f`.
const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Specifier that templates use for every substitution slot.
const STRING_SPECIFIER: &str = "%s";

/// Failure to render a format string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A specifier refers to an argument that was not supplied.
    #[error("format specifier `{specifier}` has no argument at index {index}")]
    MissingArgument {
        /// The offending specifier text.
        specifier: String,
        /// Zero-based argument index the specifier refers to.
        index: usize,
    },
    /// The conversion character is not supported.
    #[error("unknown conversion `{conversion}` in format specifier `{specifier}`")]
    UnknownConversion {
        /// The offending specifier text.
        specifier: String,
        /// The unsupported conversion character.
        conversion: char,
    },
    /// The argument cannot be rendered by the conversion.
    #[error("`{value}` cannot be formatted with `{specifier}`")]
    IllegalConversion {
        /// The offending specifier text.
        specifier: String,
        /// The argument that failed to convert.
        value: String,
    },
    /// The width or precision exceeds [`MAX_FIELD`].
    #[error("format specifier `{specifier}` exceeds the field limit of {limit}")]
    FieldTooLarge {
        /// The offending specifier text.
        specifier: String,
        /// The largest accepted width or precision.
        limit: usize,
    },
    /// A flag does not apply to the conversion or clashes with another flag.
    #[error("flag `{flag}` does not apply to format specifier `{specifier}`")]
    FlagMismatch {
        /// The offending specifier text.
        specifier: String,
        /// The rejected flag.
        flag: char,
    },
    /// The format string ends in the middle of a specifier.
    #[error("incomplete format specifier `{specifier}` at end of input")]
    Incomplete {
        /// The truncated specifier text.
        specifier: String,
    },
}

/// Kind of value a format specifier substitutes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FormatType {
    /// Decimal integer, `%d`.
    Integer,
    /// Floating-point number, `%f`.
    Float,
    /// Anything else, `%s`.
    String,
}

impl FormatType {
    /// Classifies a Rust type: primitive integers are [`FormatType::Integer`],
    /// `f32`/`f64` are [`FormatType::Float`], everything else is
    /// [`FormatType::String`].
    pub fn of<T: ?Sized + 'static>() -> Self {
        let id = TypeId::of::<T>();
        let integers = [
            TypeId::of::<i8>(),
            TypeId::of::<i16>(),
            TypeId::of::<i32>(),
            TypeId::of::<i64>(),
            TypeId::of::<i128>(),
            TypeId::of::<isize>(),
            TypeId::of::<u8>(),
            TypeId::of::<u16>(),
            TypeId::of::<u32>(),
            TypeId::of::<u64>(),
            TypeId::of::<u128>(),
            TypeId::of::<usize>(),
        ];
        if integers.contains(&id) {
            FormatType::Integer
        } else if id == TypeId::of::<f32>() || id == TypeId::of::<f64>() {
            FormatType::Float
        } else {
            FormatType::String
        }
    }

    /// The format specifier for this kind, e.g. `"%d"`.
    pub fn specifier(self) -> &'static str {
        match self {
            FormatType::Integer => "%d",
            FormatType::Float => "%f",
            FormatType::String => STRING_SPECIFIER,
        }
    }
}

/// Renders `template`, substituting `args` into its specifiers.
pub fn format(template: &str, args: &[Option<&str>]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    let mut next_index = 0;

    while let Some((start, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let spec = Specifier::parse(template, start, &mut chars)?;
        match spec.conversion {
            '%' => out.push('%'),
            'n' => out.push('\n'),
            _ => {
                let index = match spec.index {
                    Some(index) => index,
                    None => {
                        next_index += 1;
                        next_index - 1
                    }
                };
                let arg = args
                    .get(index)
                    .ok_or_else(|| FormatError::MissingArgument {
                        specifier: spec.text.to_owned(),
                        index,
                    })?;
                let rendered = spec.render(*arg)?;
                spec.pad_into(&mut out, &rendered, arg.is_some());
            }
        }
    }
    Ok(out)
}

/// Replaces each `%s` in `template` with the next argument, in order.
///
/// Only `%s` is recognized. Slots without an argument, and absent
/// arguments, render as [`ABSENT`].
pub fn substitute(template: &str, args: &[Option<&str>]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    for (slot, piece) in template.split(STRING_SPECIFIER).enumerate() {
        if slot > 0 {
            out.push_str(args.get(slot - 1).copied().flatten().unwrap_or(ABSENT));
        }
        out.push_str(piece);
    }
    out
}

/// One parsed `%...` specifier.
struct Specifier<'a> {
    text: &'a str,
    /// Zero-based explicit argument index.
    index: Option<usize>,
    left_justify: bool,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

impl<'a> Specifier<'a> {
    /// Parses the specifier whose `%` sits at byte `start`.
    fn parse(
        template: &'a str,
        start: usize,
        chars: &mut Peekable<CharIndices<'_>>,
    ) -> Result<Self, FormatError> {
        let digits_at = chars.peek().map_or(template.len(), |&(at, _)| at);
        let mut index = None;
        let mut width = take_number(chars);
        let mut zero_pad = width.is_some() && template[digits_at..].starts_with('0');
        if width.is_some() && chars.next_if(|&(_, c)| c == '$').is_some() {
            let position = width.take().unwrap_or(0);
            if position == 0 {
                // `%0$s` has no 1-based position to refer to.
                return Err(FormatError::MissingArgument {
                    specifier: specifier_text(template, start, chars),
                    index: 0,
                });
            }
            index = Some(position - 1);
        }
        let mut left_justify = false;
        if width.is_none() {
            left_justify = chars.next_if(|&(_, c)| c == '-').is_some();
            zero_pad = chars.peek().is_some_and(|&(_, c)| c == '0');
            width = take_number(chars);
        }
        let precision = chars
            .next_if(|&(_, c)| c == '.')
            .map(|_| take_number(chars).unwrap_or(0));

        let Some((at, conversion)) = chars.next() else {
            return Err(FormatError::Incomplete {
                specifier: template[start..].to_owned(),
            });
        };
        let text = &template[start..at + conversion.len_utf8()];
        if [width, precision].into_iter().flatten().any(|field| field > MAX_FIELD) {
            return Err(FormatError::FieldTooLarge {
                specifier: text.to_owned(),
                limit: MAX_FIELD,
            });
        }
        if zero_pad && (left_justify || !matches!(conversion, 'd' | 'f')) {
            return Err(FormatError::FlagMismatch {
                specifier: text.to_owned(),
                flag: '0',
            });
        }
        Ok(Specifier {
            text,
            index,
            left_justify,
            zero_pad,
            width,
            precision,
            conversion,
        })
    }

    fn render(&self, arg: Option<&str>) -> Result<String, FormatError> {
        match self.conversion {
            'b' => return Ok(arg.is_some().to_string()),
            's' | 'S' | 'd' | 'f' => {}
            conversion => {
                return Err(FormatError::UnknownConversion {
                    specifier: self.text.to_owned(),
                    conversion,
                })
            }
        }
        let Some(value) = arg else {
            return Ok(match self.conversion {
                'S' => ABSENT.to_uppercase(),
                _ => ABSENT.to_owned(),
            });
        };
        match self.conversion {
            's' => Ok(self.truncate(value).to_owned()),
            'S' => Ok(self.truncate(value).to_uppercase()),
            'd' => value
                .trim()
                .parse::<i128>()
                .map(|number| number.to_string())
                .map_err(|_| self.illegal(value)),
            _ => {
                let number = value.trim().parse::<f64>().map_err(|_| self.illegal(value))?;
                let precision = self.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
                Ok(format!("{number:.precision$}"))
            }
        }
    }

    /// Applies the precision of `%.Ns` as a character limit.
    fn truncate<'v>(&self, value: &'v str) -> &'v str {
        match self.precision {
            Some(limit) => value
                .char_indices()
                .nth(limit)
                .map_or(value, |(end, _)| &value[..end]),
            None => value,
        }
    }

    fn illegal(&self, value: &str) -> FormatError {
        FormatError::IllegalConversion {
            specifier: self.text.to_owned(),
            value: value.to_owned(),
        }
    }

    /// Pads `rendered` to the width. Absent values are never zero-padded.
    fn pad_into(&self, out: &mut String, rendered: &str, present: bool) {
        let fill = self
            .width
            .unwrap_or(0)
            .saturating_sub(rendered.chars().count());
        if self.zero_pad && present {
            let (sign, digits) = rendered
                .strip_prefix('-')
                .map_or(("", rendered), |rest| ("-", rest));
            out.push_str(sign);
            out.push_str(&"0".repeat(fill));
            out.push_str(digits);
            return;
        }
        if !self.left_justify {
            out.push_str(&" ".repeat(fill));
        }
        out.push_str(rendered);
        if self.left_justify {
            out.push_str(&" ".repeat(fill));
        }
    }
}

fn take_number(chars: &mut Peekable<CharIndices<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        let digit = c.to_digit(10).map_or(0, |d| d as usize);
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit));
    }
    value
}

/// Text of a specifier that failed before its conversion was consumed.
fn specifier_text(template: &str, start: usize, chars: &mut Peekable<CharIndices<'_>>) -> String {
    let end = chars
        .next()
        .map_or(template.len(), |(at, c)| at + c.len_utf8());
    template[start..end].to_owned()
}
