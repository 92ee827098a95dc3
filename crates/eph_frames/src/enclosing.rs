//! Smallest circle containing three celestial points (Meeus ch.20).

use crate::separation::{CelestialPoint, angular_separation};

/// Diameter (radians) of the smallest circle containing `p1`, `p2` and
/// `p3`.
///
/// With `a` the largest pairwise separation and `b`, `c` the others: if
/// `a ≥ √(b² + c²)` the circle has the two farthest points as diameter,
/// otherwise it is the circle through all three points. Valid for
/// separations of a few degrees, where the spherical triangle is close to
/// planar.
pub fn smallest_circle<P: CelestialPoint>(p1: &P, p2: &P, p3: &P) -> f64 {
    let mut sides = [
        angular_separation(p1, p2),
        angular_separation(p1, p3),
        angular_separation(p2, p3),
    ];
    sides.sort_by(|x, y| y.total_cmp(x));
    let [a, b, c] = sides;

    if a >= b.hypot(c) {
        return a;
    }
    let num = 2.0 * a * b * c;
    let den = ((a + b + c) * (a + b - c) * (b + c - a) * (a + c - b)).sqrt();
    num / den
}
