// tests/normalize.rs
use approx::assert_relative_eq;
use glam::Vec3;
use symbios_curves::{CurveError, FitBox, Grammar, PathElement, fit, generate_points};

fn bounds(elements: &[PathElement]) -> (Vec3, Vec3) {
    elements.iter().filter_map(PathElement::point).fold(
        (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
        |(min, max), p| (min.min(p), max.max(p)),
    )
}

fn plant_points() -> Vec<PathElement> {
    let plant = Grammar::new(
        "X",
        [('X', "F[-X][X]F[-X]+FX"), ('F', "FF")],
        25f32.to_radians(),
    );
    generate_points(&plant, 3).unwrap()
}

#[test]
fn test_fit_contains_and_preserves_aspect() {
    let points = plant_points();
    let target = FitBox::default();
    let fitted = target.fit(&points).unwrap();

    let tolerance = 1e-3;
    for p in fitted.iter().filter_map(PathElement::point) {
        assert!(p.cmpge(target.min - tolerance).all(), "{p} below target");
        assert!(p.cmple(target.max + tolerance).all(), "{p} above target");
    }

    let (min, max) = bounds(&points);
    let (fit_min, fit_max) = bounds(&fitted);
    let extent = max - min;
    let fit_extent = fit_max - fit_min;
    assert_relative_eq!(
        extent.x / extent.y,
        fit_extent.x / fit_extent.y,
        max_relative = 1e-4
    );

    // The limiting axis fills the target exactly.
    assert_relative_eq!(fit_extent.max_element(), 200.0, max_relative = 1e-4);
}

#[test]
fn test_fit_centers_curve() {
    let fitted = fit(
        &plant_points(),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 40.0, 10.0),
    )
    .unwrap();
    let (min, max) = bounds(&fitted);
    let center = (min + max) / 2.0;
    assert!(center.abs_diff_eq(Vec3::new(5.0, 20.0, 5.0), 1e-3));
}

#[test]
fn test_planar_curve_is_not_collapsed() {
    let koch = Grammar::new("F--F--F", [('F', "F+F--F+F")], 60f32.to_radians()).closed();
    let fitted = FitBox::default().fit(&generate_points(&koch, 2).unwrap()).unwrap();
    let (min, max) = bounds(&fitted);

    // Flat in Z, so only X and Y constrain the scale.
    assert_relative_eq!(min.z, 0.0, epsilon = 1e-4);
    assert_relative_eq!(max.z, 0.0, epsilon = 1e-4);
    assert_relative_eq!((max - min).max_element(), 200.0, max_relative = 1e-4);
}

#[test]
fn test_breaks_pass_through() {
    let points = plant_points();
    let fitted = FitBox::default().fit(&points).unwrap();

    assert_eq!(points.len(), fitted.len());
    for (before, after) in points.iter().zip(&fitted) {
        assert_eq!(before.is_break(), after.is_break());
    }
}

#[test]
fn test_single_point_lands_in_center() {
    let fitted = fit(
        &[PathElement::Point(Vec3::new(3.0, 4.0, 5.0)), PathElement::Break],
        Vec3::splat(-1.0),
        Vec3::splat(1.0),
    )
    .unwrap();
    assert_eq!(fitted, vec![PathElement::Point(Vec3::ZERO), PathElement::Break]);
}

#[test]
fn test_no_points_is_unchanged() {
    let fitted = FitBox::default().fit(&[PathElement::Break]).unwrap();
    assert_eq!(fitted, vec![PathElement::Break]);
    assert!(FitBox::default().fit(&[]).unwrap().is_empty());
}

#[test]
fn test_invalid_target_box() {
    let points = plant_points();
    let inverted = fit(&points, Vec3::splat(1.0), Vec3::splat(-1.0));
    assert!(matches!(inverted, Err(CurveError::InvalidTargetBox { .. })));

    let flat = fit(&points, Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
    assert!(matches!(flat, Err(CurveError::InvalidTargetBox { .. })));
}
