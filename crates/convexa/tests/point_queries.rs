use convexa::{
    collision::{closest_point_on_convex, test_point_in_convex, Reason},
    math::point::Point,
    shape::Transform,
};
use pretty_assertions::assert_eq;
use rand::Rng;

mod common;

#[test]
fn test_closest_point_on_segment_polygon() {
    let segment: Vec<Point> = vec![(0., 0.).into(), (10., 0.).into()];

    assert_eq!(
        closest_point_on_convex(&segment, &(5., 5.).into()).unwrap(),
        (5., 0.).into()
    );
    assert_eq!(
        closest_point_on_convex(&segment, &(-5., 3.).into()).unwrap(),
        (0., 0.).into()
    );
    assert_eq!(
        closest_point_on_convex(&segment, &(15., 3.).into()).unwrap(),
        (10., 0.).into()
    );
}

#[test]
fn test_outside_points_report_true_distance() {
    let mut rng = common::rng();

    for _ in 0..300 {
        let polygon = common::random_convex(&mut rng, 10.);
        let query: Point = (rng.gen_range(-25.0..25.0), rng.gen_range(-25.0..25.0)).into();
        if common::inner_margin(&polygon, &query) > -1e-6 {
            continue;
        }

        let result = test_point_in_convex(&polygon, &query, Transform::default()).unwrap();
        assert!(!result.result(), "{query} is outside of {polygon:?}");

        let expected = common::brute_force_distance(&polygon, &query);
        let actual = result.closest_point().distance(&query);
        assert!(
            (expected - actual).abs() < 1e-6,
            "{query}: expected {expected} got {actual}"
        );
    }
}

#[test]
fn test_inside_points_are_contained() {
    let mut rng = common::rng();

    for _ in 0..300 {
        let polygon = common::random_convex(&mut rng, 10.);
        let query: Point = (rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)).into();
        if common::inner_margin(&polygon, &query) < 1e-6 {
            continue;
        }

        let result = test_point_in_convex(&polygon, &query, Transform::default()).unwrap();
        assert!(result.result(), "{query} is inside of {polygon:?}");
        assert_eq!(result.reason(), Reason::Containment);
        assert_eq!(result.closest_point(), query);
    }
}

#[test]
fn test_vertices_overlap() {
    let block = common::block();
    for vertex in block.iter() {
        let result = test_point_in_convex(&block, vertex, Transform::default()).unwrap();
        assert!(result.result());
        assert_ne!(result.reason(), Reason::Containment);
    }

    // only the first vertex is reached as a lone point
    let result = test_point_in_convex(&block, &block[0], Transform::default()).unwrap();
    assert_eq!(result.reason(), Reason::VertexOverlap);
    assert_eq!(result.simplex().len(), 1);

    let result = test_point_in_convex(&block, &block[1], Transform::default()).unwrap();
    assert_eq!(result.reason(), Reason::EdgeOverlap);
    assert_eq!(result.simplex().positions(), vec![block[0], block[1]]);
}

#[test]
fn test_transform_moves_polygon() {
    let block = common::block();
    let transform = Transform::from_translation((100., 0.).into());

    let result = test_point_in_convex(&block, &(105., 5.).into(), transform).unwrap();
    assert!(result.result());

    let result = test_point_in_convex(&block, &(5., 5.).into(), transform).unwrap();
    assert!(!result.result());
    assert_eq!(result.closest_point(), (100., 5.).into());
}
