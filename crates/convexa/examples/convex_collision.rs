use common::{ConfigBuilder, Stage};
use convexa::{
    collision::{minkowski_difference, QueryContext},
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
            (10., 0.).into(),
            (10., 10.).into(),
            (0., 10.).into(),
        ])
        .with_transform(Vector::new(10., 10.)),
    );
    stage.push(
        ConvexPolygon::from_hull(&[
            (0., 0.).into(),
            (8., -3.).into(),
            (12., 5.).into(),
            (4., 9.).into(),
            (5., 3.).into(),
        ])
        .with_transform((Vector::new(16., 14.), 0.4)),
    );
}

fn update(stage: &mut Stage, _cursor: Option<Point>) {
    let [a, b] = &stage.polygons[..] else {
        return;
    };

    // difference drawn around a fixed origin, so containment is visible
    let origin: Vector = (50., 20.).into();
    let outline: Vec<Point> = minkowski_difference(
        a.vertices(),
        b.vertices(),
        &a.transform(),
        &b.transform(),
    )
    .iter()
    .map(|p| p.to_point() + origin)
    .collect();

    let context = QueryContext::default();
    let penetration = context
        .test_convex_vs_convex(a.vertices(), b.vertices(), a.transform(), b.transform())
        .and_then(|result| {
            if !result.result() {
                return Ok(None);
            }
            context
                .resolve_penetration(
                    a.vertices(),
                    b.vertices(),
                    result.simplex(),
                    a.transform(),
                    b.transform(),
                )
                .map(Some)
        });

    stage.mark_outline(outline, Color::DARK_GRAY);
    stage.mark_point(origin.to_point(), Color::BLACK);

    match penetration {
        Ok(Some(penetration)) => {
            let contact_a = penetration.contact_a();
            let contact_b = penetration.contact_b();
            stage.mark_point(contact_a, Color::MAGENTA);
            stage.mark_point(contact_b, Color::CYAN);
            stage.mark_segment(contact_b, contact_b + penetration.mtv(), Color::RED);
            stage.mark_segment(
                origin.to_point(),
                origin.to_point() + penetration.mtv(),
                Color::RED,
            );
        }
        Ok(None) => {}
        Err(err) => eprintln!("{err}"),
    }
}

fn main() {
    common::run_window(
        "convex collision, drag a polygon",
        ConfigBuilder::default(),
        init,
        update,
    );
}
