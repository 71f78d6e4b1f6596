use subst::{args, Any};

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

subst::value_type!(Point);

#[subst::substitute]
trait Canvas {
    fn translate(&self, point: &Point, by: i32) -> Point;
}

#[test]
fn custom_types_are_boxed() {
    let mut canvas = SubstituteCanvas::new();
    canvas.set_return_value("translate", Point { x: 2, y: 2 });

    assert_eq!(canvas.translate(&Point { x: 1, y: 1 }, 1), Point { x: 2, y: 2 });
    assert!(canvas.called("translate", args![Point { x: 1, y: 1 }, 1], 1));
    assert!(!canvas.called("translate", args![Point { x: 0, y: 1 }, Any], Any));
}

#[test]
#[should_panic(expected = "the stub of Canvas::translate is a")]
fn custom_types_are_checked() {
    let mut canvas = SubstituteCanvas::new();
    canvas.set_return_value("translate", "not a point");
    canvas.translate(&Point { x: 1, y: 1 }, 1);
}
