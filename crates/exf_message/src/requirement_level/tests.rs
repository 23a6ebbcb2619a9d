use pretty_assertions::assert_eq;

use super::*;

#[test]
fn display_replaces_underscores() {
    for level in RequirementLevel::ALL {
        assert_eq!(level.to_string(), level.name().replace('_', " "));
    }
}

#[test]
fn display_examples() {
    assert_eq!(RequirementLevel::MustNot.to_string(), "MUST NOT");
    assert_eq!(RequirementLevel::NotRecommended.to_string(), "NOT RECOMMENDED");
    assert_eq!(RequirementLevel::May.to_string(), "MAY");
}

#[test]
fn all_is_in_declaration_order() {
    for (index, level) in RequirementLevel::ALL.iter().enumerate() {
        assert_eq!(*level as usize, index);
    }
    assert_eq!(RequirementLevel::ALL.len(), 11);
}

#[test]
fn parses_name_and_keyword() {
    assert_eq!("MUST_NOT".parse(), Ok(RequirementLevel::MustNot));
    assert_eq!("MUST NOT".parse(), Ok(RequirementLevel::MustNot));
    assert_eq!("SHOULD".parse(), Ok(RequirementLevel::Should));
    assert_eq!("must".parse::<RequirementLevel>(), Err(()));
    assert_eq!("".parse::<RequirementLevel>(), Err(()));
}

/// Synonymy is symmetric and never includes the keyword itself.
#[test]
fn synonyms_are_symmetric() {
    for level in RequirementLevel::ALL {
        assert!(!level.synonyms().contains(level), "{level} lists itself");
        for synonym in level.synonyms() {
            assert!(
                synonym.synonyms().contains(level),
                "{synonym} does not list {level}"
            );
        }
    }
}
