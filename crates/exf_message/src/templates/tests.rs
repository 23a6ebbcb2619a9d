use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn one_arg_phrasings() {
    let expected = [
        (OneArgTemplate::MustBeFalse, "`%s` MUST be `false`"),
        (OneArgTemplate::MustBeNegative, "`%s` MUST be negative"),
        (OneArgTemplate::MustBePositive, "`%s` MUST be positive"),
        (OneArgTemplate::MustBeTrue, "`%s` MUST be `true`"),
        (OneArgTemplate::MustBeUnique, "`%s` MUST be unique"),
        (OneArgTemplate::MustBeValid, "`%s` MUST be valid"),
        (OneArgTemplate::MustExist, "`%s` MUST exist"),
        (OneArgTemplate::MustNotBeEmpty, "`%s` MUST NOT be empty"),
        (OneArgTemplate::MustNotBeNegative, "`%s` MUST NOT be negative"),
        (OneArgTemplate::MustNotBeNull, "`%s` MUST NOT be `null`"),
        (OneArgTemplate::MustNotBePositive, "`%s` MUST NOT be positive"),
        (OneArgTemplate::MustNotExist, "`%s` MUST NOT exist"),
    ];
    assert_eq!(expected.len(), OneArgTemplate::ALL.len());
    for (template, raw) in expected {
        assert_eq!(template.template(), raw, "{}", template.name());
    }
}

#[test]
fn two_arg_phrasings() {
    let expected = [
        (TwoArgTemplate::MustBeAtLeast, "`%s` MUST be at least `%s`"),
        (TwoArgTemplate::MustBeAtMost, "`%s` MUST be at most `%s`"),
        (TwoArgTemplate::MustBeEqualTo, "`%s` MUST be equal to `%s`"),
        (TwoArgTemplate::MustBeGreaterThan, "`%s` MUST be greater than `%s`"),
        (TwoArgTemplate::MustBeInstanceOf, "`%s` MUST be an instance of `%s`"),
        (TwoArgTemplate::MustBeLessThan, "`%s` MUST be less than `%s`"),
        (TwoArgTemplate::MustBeOfLength, "`%s` MUST be of length `%s`"),
        (TwoArgTemplate::MustBeOfSize, "`%s` MUST be of size `%s`"),
        (TwoArgTemplate::MustContain, "`%s` MUST contain `%s`"),
        (TwoArgTemplate::MustMatchRegex, "`%s` MUST match RegEx `%s`"),
        (TwoArgTemplate::MustNotBeEqualTo, "`%s` MUST NOT be equal to `%s`"),
        (TwoArgTemplate::MustNotBeInstanceOf, "`%s` MUST NOT be an instance of `%s`"),
        (TwoArgTemplate::MustNotContain, "`%s` MUST NOT contain `%s`"),
    ];
    assert_eq!(expected.len(), TwoArgTemplate::ALL.len());
    for (template, raw) in expected {
        assert_eq!(template.template(), raw, "{}", template.name());
    }
}

#[test]
fn must_not_be_null_example() {
    assert_eq!(
        OneArgTemplate::MustNotBeNull.format("username"),
        "`username` MUST NOT be `null`"
    );
}

#[test]
fn must_be_at_least_example() {
    assert_eq!(
        TwoArgTemplate::MustBeAtLeast.format("age", "18"),
        "`age` MUST be at least `18`"
    );
}

#[test]
fn absent_arguments_render_as_null() {
    assert_eq!(OneArgTemplate::MustExist.format(None), "`null` MUST exist");
    assert_eq!(
        TwoArgTemplate::MustContain.format("list", None),
        "`list` MUST contain `null`"
    );
    assert_eq!(
        TwoArgTemplate::MustContain.format(None, None),
        "`null` MUST contain `null`"
    );
}

#[test]
fn format_agrees_with_generic_engine() {
    for template in OneArgTemplate::ALL {
        let engine = crate::format::format(template.template(), &[Some("test")]).unwrap();
        assert_eq!(template.format("test"), engine);
    }
    for template in TwoArgTemplate::ALL {
        let engine =
            crate::format::format(template.template(), &[Some("test1"), Some("test2")]).unwrap();
        assert_eq!(template.format("test1", "test2"), engine);
    }
}

#[test]
fn all_is_in_declaration_order() {
    for (index, template) in OneArgTemplate::ALL.iter().enumerate() {
        assert_eq!(*template as usize, index);
    }
    for (index, template) in TwoArgTemplate::ALL.iter().enumerate() {
        assert_eq!(*template as usize, index);
    }
}

#[test]
fn names_round_trip_through_from_str() {
    for template in OneArgTemplate::ALL {
        assert_eq!(template.name().parse(), Ok(*template));
    }
    for template in TwoArgTemplate::ALL {
        assert_eq!(template.name().parse(), Ok(*template));
    }
    assert_eq!("MUST_BE_AT_LEAST".parse::<OneArgTemplate>(), Err(()));
    assert_eq!("must_exist".parse::<OneArgTemplate>(), Err(()));
}

#[test]
fn display_is_raw_template() {
    assert_eq!(OneArgTemplate::MustBeValid.to_string(), "`%s` MUST be valid");
    assert_eq!(
        TwoArgTemplate::MustBeOfSize.to_string(),
        "`%s` MUST be of size `%s`"
    );
}

#[test]
fn slot_counts_match_arity() {
    for template in OneArgTemplate::ALL {
        assert_eq!(template.template().matches("%s").count(), 1);
    }
    for template in TwoArgTemplate::ALL {
        assert_eq!(template.template().matches("%s").count(), 2);
    }
}

proptest! {
    #[test]
    fn one_arg_format_is_deterministic(
        index in 0..OneArgTemplate::ALL.len(),
        arg in any::<Option<String>>(),
    ) {
        let template = OneArgTemplate::ALL[index];
        prop_assert_eq!(template.format(arg.as_deref()), template.format(arg.as_deref()));
    }

    #[test]
    fn two_arg_format_is_deterministic(
        index in 0..TwoArgTemplate::ALL.len(),
        first in any::<Option<String>>(),
        second in any::<Option<String>>(),
    ) {
        let template = TwoArgTemplate::ALL[index];
        prop_assert_eq!(
            template.format(first.as_deref(), second.as_deref()),
            template.format(first.as_deref(), second.as_deref())
        );
    }

    /// The subject is rendered code-quoted at the start of the sentence.
    #[test]
    fn subject_is_code_quoted(index in 0..OneArgTemplate::ALL.len(), arg in "[a-zA-Z0-9_]{1,20}") {
        let template = OneArgTemplate::ALL[index];
        let quoted = format!("`{arg}` ");
        prop_assert!(template.format(arg.as_str()).starts_with(&quoted));
    }
}
