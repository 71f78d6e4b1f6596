#[subst::substitute(skip_fns(describe))]
trait Cat {
    fn name(&self) -> String;

    fn describe(&self) -> String {
        format!("{} the cat", self.name())
    }
}

#[test]
fn skipped_functions_keep_their_default_body() {
    let mut cat = SubstituteCat::new();
    cat.set_return_value("name", "Tama");

    assert_eq!(cat.describe(), "Tama the cat");
    assert!(cat.called("name", subst::Any, 1));
    assert!(!cat.called("describe", subst::Any, subst::Any));
}

#[subst::substitute(name = "FakeCat")]
trait NamedCat {
    fn name(&self) -> String;
}

#[test]
fn substitute_type_can_be_renamed() {
    let mut cat = FakeCat::default();
    cat.set_return_value("name", "Tama");

    assert_eq!(cat.name(), "Tama");
    assert_eq!(cat.substitute.name(), "NamedCat");
}
