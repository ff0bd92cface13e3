use common::{ConfigBuilder, Stage};
use convexa::{
    collision::{test_point_in_convex, Reason},
    math::{point::Point, vector::Vector},
    shape::ConvexPolygon,
};
use speedy2d::color::Color;

#[path = "../examples_common.rs"]
mod common;

fn init(stage: &mut Stage) {
    stage.push(
        ConvexPolygon::new(vec![
            (0., 0.).into(),
            (12., -4.).into(),
            (20., 6.).into(),
            (10., 16.).into(),
            (-2., 10.).into(),
        ])
        .with_transform(Vector::new(20., 20.)),
    );
}

fn update(stage: &mut Stage, cursor: Option<Point>) {
    let Some(cursor) = cursor else {
        return;
    };

    let results: Vec<_> = stage
        .polygons
        .iter()
        .filter_map(|polygon| {
            test_point_in_convex(polygon.vertices(), &cursor, polygon.transform()).ok()
        })
        .collect();

    for result in results {
        let color = match result.reason() {
            Reason::Containment => Color::GREEN,
            Reason::RepeatedSupportPoint => Color::RED,
            _ => Color::YELLOW,
        };
        let simplex = result.simplex().positions();
        stage.mark_outline(simplex, Color::BLUE);
        stage.mark_point(result.closest_point(), color);
        stage.mark_segment(cursor, result.closest_point(), color);
    }
}

fn main() {
    common::run_window(
        "point in convex",
        ConfigBuilder::default().draw_center_point(true),
        init,
        update,
    );
}
