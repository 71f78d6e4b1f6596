use subst::{verify, Any};

#[subst::substitute]
trait Counter {
    #[substitute(property)]
    fn value(&self) -> i64;

    #[substitute(setter = "value")]
    fn set_value(&mut self, value: i64);

    #[substitute(property, name = "displayName")]
    fn display_name(&self) -> String;
}

#[test]
fn setter_stores_value_for_getter() {
    let mut counter = SubstituteCounter::new();
    counter.set_value(3);

    assert_eq!(counter.value(), 3);
    assert!(counter.called("set_value", subst::args![3i64], 1));
    assert!(counter.called("value", Any, 1));
    assert!(verify(&counter).setter("value").called_with(subst::args![3]));
}

#[test]
fn setup_is_not_recorded() {
    let mut counter = SubstituteCounter::new();
    counter.set_property_value("value", 10);
    counter.set_property_value("displayName", "ten");

    assert_eq!(counter.call_count(), 0);
    assert_eq!(counter.display_name(), "ten");
    assert_eq!(counter.value(), 10);
    assert_eq!(counter.call_count(), 2);
    assert!(!verify(&counter).setter("value").called());
}

#[test]
fn properties_do_not_read_return_values() {
    let mut counter = SubstituteCounter::new();
    counter.set_return_value("value", 1);

    assert!(counter.try_get_property::<i64>("value").is_err());
    assert!(verify(&counter).property("value").called());
}

#[test]
fn last_write_wins() {
    let mut counter = SubstituteCounter::new();
    counter.set_value(1);
    counter.set_value(2);

    assert_eq!(counter.value(), 2);
    assert_eq!(counter.count("set_value", Any), 2);
    assert!(verify(&counter).setter("value").called_times(Any, 2));
}
