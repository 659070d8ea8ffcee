//! Pure vector helpers shared by both target topologies.
//!
//! Angles are "clock angles": degrees measured clockwise from straight up
//! (twelve o'clock). Screen coordinates grow downward, so a vector pointing
//! up has a negative `y`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Linear blend: `self * (1 - t) + other * t`.
    pub fn lerp(self, other: Vec2, t: f64) -> Self {
        Self::new(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
        )
    }

    /// Shrinks the vector onto the circle of radius `max` when it is longer,
    /// keeping its direction. A zero vector is returned unchanged.
    pub fn clamp_length(self, max: f64) -> Self {
        let len = self.length();
        let k = if len > max && len > 0.0 { max / len } else { 1.0 };
        self.scale(k)
    }
}

/// Dominant direction of a drag in the orthogonal topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn clock_angle(self) -> f64 {
        match self {
            Direction::Up => 0.0,
            Direction::Right => 90.0,
            Direction::Down => 180.0,
            Direction::Left => 270.0,
        }
    }
}

/// Angle of `(dx, dy)` clockwise from up, in `[0, 360)`.
pub fn clock_angle(dx: f64, dy: f64) -> f64 {
    let deg = dx.atan2(-dy).to_degrees();
    let a = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Shortest circular distance between two angles, in `[0, 180]`.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 { 360.0 - d } else { d }
}

/// Point at clock angle `angle_degrees` and radius `distance` from the origin.
pub fn polar_offset(angle_degrees: f64, distance: f64) -> Vec2 {
    let rad = angle_degrees.to_radians();
    Vec2::new(rad.sin() * distance, -rad.cos() * distance)
}

/// Dominant-axis test; ties go to the vertical axis.
pub fn axis_direction(dx: f64, dy: f64) -> Direction {
    if dy.abs() >= dx.abs() {
        if dy < 0.0 { Direction::Up } else { Direction::Down }
    } else if dx < 0.0 {
        Direction::Left
    } else {
        Direction::Right
    }
}
