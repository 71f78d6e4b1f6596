use proptest::prelude::*;
use subst::{args, expect, verify, Any, Arguments, ArgsFilter, Substitute, Times};

const FUNCTIONS: [&str; 3] = ["meow", "purr", "sleep"];

fn record_all(calls: &[(usize, u8)]) -> Substitute {
    let substitute = Substitute::new("Cat");
    for (function, argument) in calls {
        substitute.call_void(
            FUNCTIONS[*function],
            Arguments::new().with("argument", *argument),
        );
    }
    substitute
}

fn calls() -> impl Strategy<Value = Vec<(usize, u8)>> {
    prop::collection::vec((0..FUNCTIONS.len(), 0u8..4), 0..24)
}

fn times() -> impl Strategy<Value = Times> {
    prop_oneof![
        Just(Times::from(Any)),
        (0usize..6).prop_map(Times::from),
        (0usize..4, 0usize..4).prop_map(|(start, length)| Times::from(start..start + length)),
        (0usize..6).prop_map(|start| Times::from(start..)),
    ]
}

fn filter() -> impl Strategy<Value = ArgsFilter> {
    prop_oneof![
        Just(ArgsFilter::Any),
        (0u8..4).prop_map(|argument| args![argument]),
        Just(args![Any]),
        Just(args![]),
    ]
}

proptest! {
    #[test]
    fn ledger_is_append_only(calls in calls()) {
        let substitute = record_all(&calls);

        prop_assert_eq!(substitute.call_count(), calls.len());
        let records = substitute.calls();
        prop_assert!(records.windows(2).all(|pair| pair[0].sequence() < pair[1].sequence()));
    }

    #[test]
    fn name_only_match(calls in calls()) {
        let substitute = record_all(&calls);

        for (index, function) in FUNCTIONS.iter().enumerate() {
            let count = calls.iter().filter(|(called, _)| *called == index).count();
            prop_assert_eq!(substitute.called(function, Any, Any), count > 0);
            prop_assert!(substitute.called(function, Any, count));
        }
    }

    #[test]
    fn surfaces_agree(
        calls in calls(),
        function in 0..FUNCTIONS.len(),
        filter in filter(),
        times in times(),
    ) {
        let substitute = record_all(&calls);
        let function = FUNCTIONS[function];

        let called = substitute.called(function, filter.clone(), times);
        let verified = verify(&substitute)
            .function(function)
            .called_times(filter.clone(), times);
        let expectation = expect(&substitute).function(function).with(filter);
        prop_assert_eq!(called, verified);
        prop_assert_eq!(called, expectation.to_have_been_called(times));
        prop_assert_eq!(called, expectation.failure_message(times).is_none());
    }
}

#[test]
fn argument_match_is_exact() {
    let substitute = Substitute::new("Cat");
    substitute.call_void("meow", Arguments::new().with("name", "a"));
    substitute.call_void("meow", Arguments::new().with("name", "b"));

    assert!(substitute.called("meow", args!["a"], 1));
    assert!(substitute.called("meow", args!["b"], 1));
    assert!(!substitute.called("meow", args!["c"], Any));
    assert!(!substitute.called("meow", args!["a", "b"], Any));
}

#[test]
fn stub_round_trip() {
    let mut substitute = Substitute::new("Cat");
    substitute.set_return_value("meow", vec!["a", "b"]);

    let meow: Vec<String> = substitute.call("meow", Arguments::new());
    assert_eq!(meow, vec!["a", "b"]);
    assert!(substitute.try_call::<u8>("purr", Arguments::new()).is_err());
}
