use std::panic::{catch_unwind, AssertUnwindSafe};

use subst::{Any, Arguments, SubstituteError};

#[subst::substitute]
trait Cat {
    fn meow(&self, count: usize) -> String;

    #[substitute(property)]
    fn age(&self) -> u8;
}

#[test]
#[should_panic(expected = "no stub is configured for Cat::meow")]
fn missing_stub_panics() {
    let cat = SubstituteCat::new();
    cat.meow(2);
}

#[test]
#[should_panic(expected = "no stub is configured for Cat::age")]
fn missing_property_panics() {
    let cat = SubstituteCat::new();
    cat.age();
}

#[test]
#[should_panic(expected = "the stub of Cat::meow is a")]
fn wrong_stub_type_panics() {
    let mut cat = SubstituteCat::new();
    cat.set_return_value("meow", 3);
    cat.meow(2);
}

#[test]
#[should_panic(expected = "the stub of Cat::age is a")]
fn property_out_of_range_panics() {
    let mut cat = SubstituteCat::new();
    cat.set_property_value("age", 300);
    cat.age();
}

#[test]
fn failed_calls_are_still_recorded() {
    let cat = SubstituteCat::new();
    let result = catch_unwind(AssertUnwindSafe(|| cat.meow(2)));

    assert!(result.is_err());
    assert!(cat.called("meow", subst::args![2usize], 1));
}

#[test]
fn errors_without_panicking() {
    let mut cat = SubstituteCat::new();
    assert_eq!(
        cat.try_call::<String>("meow", Arguments::new()),
        Err(SubstituteError::StubNotConfigured {
            function: "Cat::meow".to_string(),
        })
    );

    cat.set_return_value("meow", 'm');
    assert!(matches!(
        cat.try_call::<String>("meow", Arguments::new()),
        Err(SubstituteError::StubTypeMismatch { expected, .. }) if expected.ends_with("String")
    ));
    assert!(cat.called("meow", Any, 2));
}

#[test]
fn unnamed_substitutes_report_bare_names() {
    let substitute = subst::Substitute::default();
    let error = substitute
        .try_call::<u8>("meow", Arguments::new())
        .unwrap_err();
    assert_eq!(error.to_string(), "no stub is configured for meow");
}
