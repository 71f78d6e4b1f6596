use subst::{args, expect, verify, Any, SubstituteState};

#[subst::substitute]
pub trait ExampleProtocol {
    #[substitute(property)]
    fn example_property(&self) -> i64;

    fn example_function(&self, argument: &str);

    fn example_function_with_return_value(&self) -> f64;
}

struct Consumer<P> {
    protocol: P,
}

impl<P: ExampleProtocol> Consumer<P> {
    fn read_property_twice(&self) -> (i64, i64) {
        (
            self.protocol.example_property(),
            self.protocol.example_property(),
        )
    }

    fn greet(&self, names: &[&str]) {
        for name in names {
            self.protocol.example_function(name);
        }
    }

    fn measure(&self) -> f64 {
        self.protocol.example_function_with_return_value()
    }
}

#[test]
fn property_is_read_twice() {
    let mut protocol = SubstituteExampleProtocol::new();
    protocol.set_property_value("example_property", 64);
    let consumer = Consumer { protocol };

    let (first, second) = consumer.read_property_twice();
    assert_eq!(first, 64);
    assert_eq!(second, 64);
    assert!(consumer.protocol.called("example_property", Any, 2));
}

#[test]
fn function_arguments_are_recorded() {
    let consumer = Consumer {
        protocol: SubstituteExampleProtocol::new(),
    };
    consumer.greet(&["X", "Y"]);

    let protocol = &consumer.protocol;
    assert!(protocol.called("example_function", Any, 2));
    assert!(protocol.called("example_function", args!["X"], 1));
    assert!(protocol.called("example_function", args!["Y"], 1));
    assert!(!protocol.called("example_function", args!["Z"], Any));
}

#[test]
fn return_value_is_observed() {
    let mut protocol = SubstituteExampleProtocol::new();
    protocol.set_return_value("example_function_with_return_value", 1.2345);
    let consumer = Consumer { protocol };

    assert_eq!(consumer.measure(), 1.2345);
    assert!(consumer
        .protocol
        .called("example_function_with_return_value", Any, Any));
}

#[test]
fn every_surface_sees_the_same_calls() {
    let mut protocol = SubstituteExampleProtocol::default();
    protocol.set_property_value("example_property", 64);
    assert_eq!(protocol.state(), SubstituteState::Fresh);

    let consumer = Consumer { protocol };
    consumer.read_property_twice();
    consumer.greet(&["X", "Y", "X"]);

    let protocol = &consumer.protocol;
    assert_eq!(protocol.state(), SubstituteState::InUse);
    assert_eq!(protocol.call_count(), 5);
    assert_eq!(protocol.count("example_function", args!["X"]), 2);

    assert!(verify(protocol).property("example_property").called());
    assert!(verify(protocol)
        .function("example_function")
        .called_times(args!["X"], 2));
    assert!(!verify(protocol)
        .function("example_function_with_return_value")
        .called());

    expect(protocol)
        .function("example_function")
        .with(args!["Y"])
        .assert_called(1);
    expect(protocol).function("example_function").any().assert_called(3);
}

#[test]
fn calls_are_kept_in_order() {
    let consumer = Consumer {
        protocol: SubstituteExampleProtocol::new(),
    };
    consumer.greet(&["A", "B"]);

    let calls: Vec<_> = consumer
        .protocol
        .calls()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        calls,
        vec![
            r#"#0 example_function(argument: "A")"#,
            r#"#1 example_function(argument: "B")"#,
        ]
    );
}
