#![allow(dead_code)]

use convexa::{
    collision::closest_point_on_segment,
    math::{point::Point, vector::Vector, FloatNum},
    shape::{convex_hull, ConvexPolygon},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

pub fn block() -> Vec<Point> {
    vec![(0., 0.).into(), (10., 0.).into(), (10., 10.).into(), (0., 10.).into()]
}

/// hull of a random cloud, at least a triangle with some area
pub fn random_convex(rng: &mut StdRng, radius: FloatNum) -> Vec<Point> {
    loop {
        let count = rng.gen_range(3..16);
        let cloud: Vec<Point> = (0..count)
            .map(|_| (rng.gen_range(-radius..radius), rng.gen_range(-radius..radius)).into())
            .collect();
        let hull = convex_hull(&cloud);
        if hull.len() >= 3 && area(&hull) > radius * radius * 0.05 {
            return hull;
        }
    }
}

pub fn area(polygon: &[Point]) -> FloatNum {
    let mut doubled = 0.;
    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        doubled += a.to_vector() ^ b.to_vector();
    }
    doubled.abs() * 0.5
}

/// signed distance of `q` to the nearest edge line, positive inside a counter-clockwise polygon
pub fn inner_margin(polygon: &[Point], q: &Point) -> FloatNum {
    polygon
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let b = polygon[(i + 1) % polygon.len()];
            let edge: Vector = (*a, b).into();
            (edge ^ Vector::from((*a, *q))) / edge.abs()
        })
        .fold(FloatNum::MAX, FloatNum::min)
}

pub fn brute_force_distance(polygon: &[Point], q: &Point) -> FloatNum {
    ConvexPolygon::new(polygon)
        .edges()
        .map(|edge| closest_point_on_segment(edge.start_point(), edge.end_point(), q).distance(q))
        .fold(FloatNum::MAX, FloatNum::min)
}
