use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn distance_is_symmetric_and_zero_on_self() {
    let samples = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 120.0),
        Point::new(240.0, 200.0),
        Point::new(-3.5, 1e6),
    ];
    for p in &samples {
        assert_eq!(distance(p, p), 0.0);
        for q in &samples {
            assert_eq!(distance(p, q), distance(q, p));
        }
    }
}

#[test]
fn distance_between_sample_points() {
    let d = distance(&Point::new(100.0, 120.0), &Point::new(240.0, 200.0));
    assert!(approx(d, (140.0f64 * 140.0 + 80.0 * 80.0).sqrt()));
    assert!((d - 161.25).abs() < 0.01);
}

#[test]
fn distance_does_not_overflow_for_large_coordinates() {
    let d = distance(&Point::new(1e200, 0.0), &Point::new(-1e200, 0.0));
    assert!(d.is_finite());
    assert!(approx(d / 1e200, 2.0));
}

#[test]
fn minkowski_mapping_flips_vertical_axis() {
    let mapper = CoordinateMapper::new(&Viewport::new(800.0, 600.0));
    let s = mapper.to_spacetime(&Point::new(400.0, 200.0));
    assert_eq!(s, SpacetimePoint::new(0.0, 100.0));
    assert_eq!(interval_sq(&s), 10000.0);

    let below_left = mapper.to_spacetime(&Point::new(100.0, 400.0));
    assert_eq!(below_left, SpacetimePoint::new(-300.0, -100.0));
}

#[test]
fn interval_at_origin_is_zero() {
    let viewport = Viewport::new(800.0, 600.0);
    let mapper = CoordinateMapper::new(&viewport);
    let origin = mapper.to_spacetime(&viewport.center());
    assert_eq!(origin, SpacetimePoint::ORIGIN);
    assert_eq!(interval_sq(&origin), 0.0);
}

#[test]
fn interval_matches_mapped_coordinates() {
    let mapper = CoordinateMapper::new(&Viewport::new(640.0, 480.0));
    for &(x, y) in &[(0.0, 0.0), (320.0, 10.0), (13.0, 470.0), (600.5, 240.25)] {
        let s = mapper.to_spacetime(&Point::new(x, y));
        let dx = x - 320.0;
        let dt = 240.0 - y;
        assert_eq!(interval_sq(&s), dt * dt - dx * dx);
    }
}

#[test]
fn spacetime_round_trip_within_viewport() {
    let viewport = Viewport::new(800.0, 600.0);
    let mapper = CoordinateMapper::new(&viewport);
    let (cx, cy) = viewport.half_extents();
    let mut x = -cx;
    while x <= cx {
        let mut t = -cy;
        while t <= cy {
            let s = SpacetimePoint::new(x, t);
            assert_eq!(mapper.to_spacetime(&mapper.to_screen(&s)), s);
            t += 37.5;
        }
        x += 50.0;
    }
}

#[test]
fn euclidean_relative_is_identity() {
    let mapper = CoordinateMapper::new(&Viewport::new(800.0, 600.0));
    let p = Point::new(12.0, 34.0);
    assert_eq!(mapper.relative(Mode::Euclidean, &p), p);
    assert_eq!(
        mapper.relative(Mode::Minkowski, &p),
        Point::new(12.0 - 400.0, 300.0 - 34.0)
    );
}

#[test]
fn mapper_follows_viewport_center() {
    let p = Point::new(100.0, 100.0);
    let small = CoordinateMapper::new(&Viewport::new(200.0, 200.0));
    let large = CoordinateMapper::new(&Viewport::new(400.0, 400.0));
    assert_eq!(small.to_spacetime(&p), SpacetimePoint::ORIGIN);
    assert_eq!(large.to_spacetime(&p), SpacetimePoint::new(-100.0, 100.0));
}

#[test]
fn separation_classes() {
    assert_eq!(Separation::classify(10000.0), Separation::Timelike);
    assert_eq!(Separation::classify(-1.0), Separation::Spacelike);
    assert_eq!(Separation::classify(0.0), Separation::Lightlike);
    let on_cone = interval_sq(&SpacetimePoint::new(-75.0, 75.0));
    assert_eq!(Separation::classify(on_cone), Separation::Lightlike);
}

#[test]
fn viewport_validation() {
    assert!(Viewport::try_new(800.0, 600.0).is_ok());
    assert!(matches!(
        Viewport::try_new(f64::NAN, 600.0),
        Err(PlotError::InvalidViewport { .. })
    ));
    assert!(Viewport::try_new(-1.0, 600.0).is_err());
    assert_eq!(Viewport::new(-5.0, 10.0), Viewport::new(0.0, 10.0));
}

#[test]
fn mode_toggles_between_both_geometries() {
    assert_eq!(Mode::Euclidean.toggled(), Mode::Minkowski);
    assert_eq!(Mode::Minkowski.toggled(), Mode::Euclidean);
    assert_eq!(Mode::default(), Mode::Euclidean);
    assert_eq!(Mode::Minkowski.to_string(), "Minkowski");
}
