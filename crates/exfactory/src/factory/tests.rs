use exf_core::Exception;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn illegal_argument_from_one_arg_template() {
    let error = illegal_argument_of("username", OneArgTemplate::MustNotBeNull).unwrap();
    assert_eq!(error.message(), Some("`username` MUST NOT be `null`"));
    assert!(error.chained_cause().is_none());
}

#[test]
fn illegal_argument_from_two_arg_template() {
    let error = illegal_argument_of_value("age", TwoArgTemplate::MustBeAtLeast, "18").unwrap();
    assert_eq!(error.to_string(), "`age` MUST be at least `18`");
}

#[test]
fn illegal_state_from_one_arg_template() {
    for template in OneArgTemplate::ALL {
        let error = illegal_state_of("test", *template).unwrap();
        assert_eq!(error.message(), Some(template.format("test").as_str()));
    }
}

#[test]
fn illegal_state_from_two_arg_template() {
    for template in TwoArgTemplate::ALL {
        let error = illegal_state_of_value("test1", *template, "test2").unwrap();
        assert_eq!(
            error.message(),
            Some(template.format("test1", "test2").as_str())
        );
    }
}

#[test]
fn absent_key_and_value_render_as_null() {
    let error = illegal_state_of(None, OneArgTemplate::MustBePositive).unwrap();
    assert_eq!(error.message(), Some("`null` MUST be positive"));

    let error = illegal_argument_of_value(None, TwoArgTemplate::MustBeAtMost, None).unwrap();
    assert_eq!(error.message(), Some("`null` MUST be at most `null`"));
}

#[test]
fn absent_template_is_rejected() {
    let errors = [
        illegal_argument_of("irrelevant", None::<OneArgTemplate>).unwrap_err(),
        illegal_state_of("irrelevant", None::<OneArgTemplate>).unwrap_err(),
        illegal_argument_of_value("irrelevant", None::<TwoArgTemplate>, "irrelevant")
            .unwrap_err(),
        illegal_state_of_value("irrelevant", None::<TwoArgTemplate>, "irrelevant").unwrap_err(),
    ];
    for error in errors {
        assert!(!error.is_fatal());
        assert_eq!(error.to_string(), "`messageTemplate` MUST NOT be `null`");
    }
}
