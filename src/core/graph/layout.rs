//! Radial ring placement

use std::f64::consts::{FRAC_PI_2, PI};

/// Radius of the inner (competency) ring
pub const COMPETENCY_RING_RADIUS: f64 = 200.0;
/// Radius of the outer (skill) ring
pub const SKILL_RING_RADIUS: f64 = 350.0;
/// Symbol size of competency nodes
pub const COMPETENCY_SYMBOL_SIZE: f64 = 23.7;
/// Symbol size of skill nodes
pub const SKILL_SYMBOL_SIZE: f64 = 27.53;

/// A 2D position on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, positive to the right
    pub x: f64,
    /// Vertical coordinate, positive downward (screen convention)
    pub y: f64,
}

/// Compute the position of one ring entry
///
/// Entry `position` of a `count`-entry ring is placed at angle
/// `2π·position/count − π/2`, so entry 0 sits at 12 o'clock and the rest
/// follow clockwise in even steps.
///
/// # Arguments
/// * `position` - Zero-based entry position, less than `count`
/// * `count` - Total ring size, at least 1
/// * `radius` - Ring radius
#[must_use]
pub fn ring_point(position: usize, count: usize, radius: f64) -> Point {
    let angle = 2.0 * PI * position as f64 / count as f64 - FRAC_PI_2;
    Point {
        x: angle.cos() * radius,
        y: angle.sin() * radius,
    }
}

/// Place `count` entries evenly around a ring of the given radius
#[must_use]
pub fn ring_points(count: usize, radius: f64) -> Vec<Point> {
    (0..count)
        .map(|position| ring_point(position, count, radius))
        .collect()
}
