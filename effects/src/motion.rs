//! Pointer-follower easing and scroll parallax.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::CURSOR_EASE;

/// Point in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Eases a decorative follower toward the last pointer position, one
/// animation frame at a time.
#[derive(Debug, Clone)]
pub struct CursorFollower {
    pub position: Point,
    pub target: Point,
    ease: f64,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CURSOR_EASE)
    }
}

impl CursorFollower {
    #[must_use]
    pub fn new(ease: f64) -> Self {
        Self { position: Point::default(), target: Point::default(), ease: ease.clamp(0.0, 1.0) }
    }

    pub fn aim(&mut self, target: Point) {
        self.target = target;
    }

    /// Close part of the remaining distance. Returns the new position.
    pub fn step(&mut self) -> Point {
        self.position.x += (self.target.x - self.position.x) * self.ease;
        self.position.y += (self.target.y - self.position.y) * self.ease;
        self.position
    }

    /// Whether the follower is within half a pixel of the pointer.
    #[must_use]
    pub fn settled(&self) -> bool {
        (self.target.x - self.position.x).abs() < 0.5 && (self.target.y - self.position.y).abs() < 0.5
    }
}

/// Vertical offset for a `data-parallax` element with the given speed factor.
#[must_use]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// Parse a `data-parallax` speed, defaulting to `0.5`.
#[must_use]
pub fn parse_speed(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(speed) if speed.is_finite() => speed,
        _ => 0.5,
    }
}
