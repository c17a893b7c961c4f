// tests/catalog.rs
use approx::assert_relative_eq;
use symbios_curves::{
    Catalog, CurveError, CurveSelector, DEFAULT_DRAW_SYMBOLS, DEFAULT_MAX_ITERATIONS, FitBox,
    PathElement, standard_catalog,
};

fn setup() -> CurveSelector {
    CurveSelector::new(standard_catalog()).unwrap()
}

#[test]
fn test_standard_catalog() {
    let catalog = standard_catalog();
    assert_eq!(catalog.len(), 11);

    let koch = &catalog.curves[0];
    assert_eq!(koch.title, "Koch snowflake");
    assert!(koch.grammar.closed_path);
    assert_eq!(koch.iterations, 1);

    let dragon = catalog
        .curves
        .iter()
        .find(|c| c.title == "Dragon curve")
        .unwrap();
    assert_eq!(dragon.max_iterations, 14);

    let lindenmayer = catalog
        .curves
        .iter()
        .find(|c| c.title == "Lindenmayer curve")
        .unwrap();
    assert_eq!(lindenmayer.url, None);
    assert_eq!(lindenmayer.max_iterations, DEFAULT_MAX_ITERATIONS);
}

#[test]
fn test_switch_wraps_around() {
    let mut selector = setup();
    let last = selector.catalog().len() - 1;

    selector.switch(-1);
    assert_eq!(selector.index(), last);
    assert_eq!(selector.current().title, "Koch curve 3d");

    selector.switch(1);
    assert_eq!(selector.index(), 0);

    selector.switch(1);
    assert_eq!(selector.current().title, "Cesaro fractal");
}

#[test]
fn test_iteration_count_is_clamped() {
    let mut selector = setup();

    selector.change_iteration_count(1);
    assert_eq!(selector.current().iterations, 2);

    selector.change_iteration_count(100);
    assert_eq!(selector.current().iterations, DEFAULT_MAX_ITERATIONS);

    selector.change_iteration_count(-100);
    assert_eq!(selector.current().iterations, 0);
}

#[test]
fn test_angle_rounds_and_wraps() {
    let mut selector = setup();

    // Koch starts at 60 degrees.
    selector.change_angle(5f32.to_radians());
    assert_relative_eq!(selector.current().grammar.angle.to_degrees(), 65.0, epsilon = 1e-3);

    selector.current_mut().grammar.angle = 0.0;
    selector.change_angle(-5f32.to_radians());
    assert_relative_eq!(selector.current().grammar.angle.to_degrees(), 355.0, epsilon = 1e-3);

    selector.current_mut().grammar.angle = 358f32.to_radians();
    selector.change_angle(5f32.to_radians());
    assert_relative_eq!(selector.current().grammar.angle.to_degrees(), 3.0, epsilon = 1e-3);

    selector.current_mut().grammar.angle = 10.4f32.to_radians();
    selector.change_angle(0.0);
    assert_relative_eq!(selector.current().grammar.angle.to_degrees(), 10.0, epsilon = 1e-3);
}

#[test]
fn test_debug_stepping() {
    let mut selector = setup();
    let full = selector.generate_points().unwrap();

    // Stepping is inert outside debug mode.
    selector.increase_debug_step();
    assert_eq!(selector.debug_step(), 1);

    selector.set_debug_mode(true);
    assert_eq!(selector.generate_points().unwrap().len(), 1);

    selector.increase_debug_step();
    selector.increase_debug_step();
    let partial = selector.generate_points().unwrap();
    assert_eq!(partial.as_slice(), &full[..3]);

    selector.decrease_debug_step();
    assert_eq!(selector.debug_step(), 2);

    selector.switch(1);
    assert!(!selector.debug_mode());
    assert_eq!(selector.debug_step(), 0);
}

#[test]
fn test_every_curve_fits_the_view() {
    let mut selector = setup().with_fit_box(FitBox::default());
    for _ in 0..selector.catalog().len() {
        selector.change_iteration_count(1);
        let points = selector.generate_points().unwrap();
        assert!(points.len() > 1, "{} produced no geometry", selector.current().title);
        for p in points.iter().filter_map(PathElement::point) {
            assert!(p.abs().max_element() <= 100.0 + 1e-3);
        }
        selector.switch(1);
    }
}

#[test]
fn test_edited_grammar_is_used() {
    let mut selector = setup();
    selector.current_mut().grammar.rules.clear();
    selector.current_mut().grammar.closed_path = false;

    // "F--F--F" with no rules: three moves plus the start point.
    assert_eq!(selector.generate_points().unwrap().len(), 4);
}

#[test]
fn test_json_round_trip() {
    let catalog = standard_catalog();
    let json = catalog.to_json().unwrap();
    assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
}

#[test]
fn test_json_defaults() {
    let json = r#"{
        "curves": [
            {
                "title": "Binary tree",
                "grammar": { "axiom": "F", "rules": { "F": "G[+F]-F", "G": "GG" }, "angle": 0.785 }
            }
        ]
    }"#;
    let catalog = Catalog::from_json(json).unwrap();
    let tree = &catalog.curves[0];

    assert_eq!(tree.max_iterations, DEFAULT_MAX_ITERATIONS);
    assert_eq!(tree.iterations, 1);
    assert_eq!(tree.url, None);
    assert_eq!(tree.grammar.step_length, 10.0);
    assert!(!tree.grammar.closed_path);
    assert_eq!(tree.grammar.draw_symbols, DEFAULT_DRAW_SYMBOLS);
    assert_eq!(tree.grammar.rules[&'G'], "GG");

    let selector = CurveSelector::new(catalog).unwrap();
    assert!(selector.generate_points().is_ok());
}

#[test]
fn test_iterations_past_cap_are_clamped() {
    let json = r#"{
        "curves": [
            {
                "title": "Doubling line",
                "max_iterations": 2,
                "iterations": 12,
                "grammar": { "axiom": "F", "rules": { "F": "FF" }, "angle": 0.0 }
            }
        ]
    }"#;
    let catalog = Catalog::from_json(json).unwrap();
    let line = &catalog.curves[0];
    assert_eq!(line.effective_iterations(), 2);

    // "F" doubled twice: four moves plus the start point.
    assert_eq!(line.generate_points().unwrap().len(), 5);

    let mut selector = CurveSelector::new(catalog).unwrap();
    assert_eq!(selector.generate_points().unwrap().len(), 5);

    selector.current_mut().iterations = 40;
    assert_eq!(selector.generate_points().unwrap().len(), 5);
}

#[test]
fn test_json_draw_symbols() {
    let json = r#"{
        "curves": [
            {
                "title": "Two-symbol line",
                "grammar": { "axiom": "AB", "rules": {}, "angle": 0.0, "draw_symbols": "A" }
            }
        ]
    }"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(catalog.curves[0].grammar.draw_symbols, "A");
    assert_eq!(catalog.curves[0].generate_points().unwrap().len(), 2);
}

#[test]
fn test_bad_json() {
    assert!(matches!(
        Catalog::from_json("{ \"curves\": 3 }"),
        Err(CurveError::Json(_))
    ));
    assert!(CurveSelector::new(Catalog::default()).is_none());
}
