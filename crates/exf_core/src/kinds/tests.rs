use pretty_assertions::assert_eq;

use super::*;
use crate::{Exception, FromMessageAndCause};

fn built<T: FromMessageAndCause + Exception>(message: &str) -> T {
    T::from_message_and_cause(Some(message.to_owned()), None)
}

#[test]
fn every_kind_renders_its_message() {
    assert_eq!(built::<IllegalArgument>("a").to_string(), "a");
    assert_eq!(built::<IllegalState>("b").to_string(), "b");
    assert_eq!(built::<UnsupportedOperation>("c").to_string(), "c");
}

#[test]
fn kinds_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<IllegalArgument>();
    assert_send_sync::<IllegalState>();
    assert_send_sync::<UnsupportedOperation>();
}

#[test]
fn debug_names_the_kind() {
    let error: UnsupportedOperation = built("nope");
    assert!(format!("{error:?}").starts_with("UnsupportedOperation"));
}
