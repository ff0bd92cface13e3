use common::{ConfigBuilder, Stage};
use convexa::{
    math::point::Point,
    shape::{convex_hull, ConvexPolygon},
};
use rand::Rng;
use speedy2d::color::Color;

#[path = "../examples_common.rs"]
mod common;

const POINT_COUNT: usize = 40;

// the cloud is regenerated on every reset (key R)
fn init(stage: &mut Stage) {
    let mut rng = rand::thread_rng();
    let cloud: Vec<Point> = (0..POINT_COUNT)
        .map(|_| (rng.gen_range(5.0..60.0), rng.gen_range(5.0..40.0)).into())
        .collect();

    let hull = convex_hull(&cloud);
    println!("{} of {} points on the hull", hull.len(), cloud.len());

    stage.push(ConvexPolygon::new(hull));
    for point in cloud {
        stage.mark_point(point, Color::BLACK);
    }
}

fn update(_stage: &mut Stage, _cursor: Option<Point>) {}

fn main() {
    common::run_window(
        "convex hull, press R for a new cloud",
        ConfigBuilder::default().is_default_paused(true),
        init,
        update,
    );
}
