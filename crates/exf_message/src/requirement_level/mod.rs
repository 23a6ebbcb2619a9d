//! Requirement-level keywords from RFC 2119.

use std::fmt;

/// Keyword indicating a requirement level, as defined by RFC 2119.
///
/// Displayed with underscores replaced by spaces, e.g. `MUST NOT`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RequirementLevel {
    /// An item is truly optional. Synonym of `OPTIONAL`.
    May,
    /// An absolute requirement. Synonym of `REQUIRED` and `SHALL`.
    Must,
    /// An absolute prohibition. Synonym of `SHALL NOT`.
    MustNot,
    /// Synonym of `SHOULD NOT`.
    NotRecommended,
    /// Synonym of `MAY`.
    Optional,
    /// Synonym of `SHOULD`.
    Recommended,
    /// Synonym of `MUST` and `SHALL`.
    Required,
    /// Synonym of `MUST` and `REQUIRED`.
    Shall,
    /// Synonym of `MUST NOT`.
    ShallNot,
    /// Valid reasons to ignore the item may exist, but the implications
    /// must be weighed first. Synonym of `RECOMMENDED`.
    Should,
    /// The behavior may be acceptable in particular circumstances.
    /// Synonym of `NOT RECOMMENDED`.
    ShouldNot,
}

impl RequirementLevel {
    /// All keywords, in declaration order.
    pub const ALL: &[RequirementLevel] = &[
        RequirementLevel::May,
        RequirementLevel::Must,
        RequirementLevel::MustNot,
        RequirementLevel::NotRecommended,
        RequirementLevel::Optional,
        RequirementLevel::Recommended,
        RequirementLevel::Required,
        RequirementLevel::Shall,
        RequirementLevel::ShallNot,
        RequirementLevel::Should,
        RequirementLevel::ShouldNot,
    ];

    /// Constant-style name, e.g. `"MUST_NOT"`.
    pub fn name(self) -> &'static str {
        match self {
            RequirementLevel::May => "MAY",
            RequirementLevel::Must => "MUST",
            RequirementLevel::MustNot => "MUST_NOT",
            RequirementLevel::NotRecommended => "NOT_RECOMMENDED",
            RequirementLevel::Optional => "OPTIONAL",
            RequirementLevel::Recommended => "RECOMMENDED",
            RequirementLevel::Required => "REQUIRED",
            RequirementLevel::Shall => "SHALL",
            RequirementLevel::ShallNot => "SHALL_NOT",
            RequirementLevel::Should => "SHOULD",
            RequirementLevel::ShouldNot => "SHOULD_NOT",
        }
    }

    /// The keyword as written in prose, e.g. `"MUST NOT"`.
    pub fn keyword(self) -> &'static str {
        match self {
            RequirementLevel::May => "MAY",
            RequirementLevel::Must => "MUST",
            RequirementLevel::MustNot => "MUST NOT",
            RequirementLevel::NotRecommended => "NOT RECOMMENDED",
            RequirementLevel::Optional => "OPTIONAL",
            RequirementLevel::Recommended => "RECOMMENDED",
            RequirementLevel::Required => "REQUIRED",
            RequirementLevel::Shall => "SHALL",
            RequirementLevel::ShallNot => "SHALL NOT",
            RequirementLevel::Should => "SHOULD",
            RequirementLevel::ShouldNot => "SHOULD NOT",
        }
    }

    /// Keywords RFC 2119 declares equivalent to this one (excluding itself).
    pub fn synonyms(self) -> &'static [RequirementLevel] {
        use RequirementLevel::{
            May, Must, MustNot, NotRecommended, Optional, Recommended, Required, Shall, ShallNot,
            Should, ShouldNot,
        };
        match self {
            May => &[Optional],
            Optional => &[May],
            Must => &[Required, Shall],
            Required => &[Must, Shall],
            Shall => &[Must, Required],
            MustNot => &[ShallNot],
            ShallNot => &[MustNot],
            Should => &[Recommended],
            Recommended => &[Should],
            ShouldNot => &[NotRecommended],
            NotRecommended => &[ShouldNot],
        }
    }
}

impl fmt::Display for RequirementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Parses either the constant-style name (`"MUST_NOT"`) or the prose
/// keyword (`"MUST NOT"`). Case-sensitive, as RFC 2119 keywords are.
impl std::str::FromStr for RequirementLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|level| level.name() == s || level.keyword() == s)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
