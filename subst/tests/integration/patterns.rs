use subst::{args, Any};

#[subst::substitute]
trait Feeder {
    fn feed(&self, _: u8, food: &str, _: &String);
}

#[test]
fn wildcard_parameters_are_recorded_by_position() {
    let feeder = SubstituteFeeder::new();
    feeder.feed(2, "fish", &"bowl".to_string());

    assert!(feeder.called("feed", args![2u8, "fish", "bowl"], 1));
    assert!(feeder.called("feed", args![Any, "fish", Any], 1));

    let calls = feeder.calls();
    let names: Vec<_> = calls[0]
        .arguments()
        .iter()
        .map(|argument| argument.name.as_str())
        .collect();
    assert_eq!(names, vec!["arg0", "food", "arg2"]);
}
