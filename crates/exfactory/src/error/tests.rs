use std::error::Error;

use exf_core::{into_cause, Exception};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn absent_parameter_message() {
    let error = BuildError::absent("messageTemplate");
    assert_eq!(error.to_string(), "`messageTemplate` MUST NOT be `null`");
    assert!(!error.is_fatal());

    let BuildError::InvalidArgument(inner) = error else {
        panic!("expected an invalid-argument error");
    };
    assert_eq!(inner.message(), Some("`messageTemplate` MUST NOT be `null`"));
}

#[test]
fn unsupported_type_message() {
    let error = BuildError::UnsupportedType { class: "std::io::Error" };
    assert_eq!(
        error.to_string(),
        "`exceptionClass` does NOT have a (`String, Throwable`) constructor"
    );
    assert_eq!(error.construction_kind(), None);
}

#[test]
fn format_errors_are_transparent() {
    let error = BuildError::from(FormatError::Incomplete {
        specifier: "%".to_owned(),
    });
    assert_eq!(error.to_string(), "incomplete format specifier `%` at end of input");
}

#[test]
fn construction_failure_chains_original_cause() {
    let error = BuildError::Construction {
        class: "Flaky",
        failure: ConstructionFailure::with_source(
            ConstructionFailureKind::InstantiationFailed,
            into_cause(std::io::Error::other("no memory")),
        ),
    };

    assert!(error.is_fatal());
    assert_eq!(
        error.construction_kind(),
        Some(ConstructionFailureKind::InstantiationFailed)
    );
    assert_eq!(error.to_string(), "failed to construct `Flaky`: instantiation-failed");

    let failure = error.source().unwrap();
    assert_eq!(failure.to_string(), "instantiation-failed");
    assert_eq!(failure.source().unwrap().to_string(), "no memory");
}
