// src/models/geometry.rs
// World <-> screen mapping for the star pattern

use nannou::prelude::*;

/// Maps pattern-space points (origin at the pattern center, Y up) to screen
/// pixels (origin top-left, Y down) by scaling around a fixed center.
#[derive(Debug, Clone, Copy)]
pub struct ScreenTransform {
    pub center_x: f32,
    pub center_y: f32,
    pub scale: f32,
}

impl ScreenTransform {
    pub fn new(center_x: f32, center_y: f32, scale: f32) -> Self {
        Self {
            center_x,
            center_y,
            scale,
        }
    }

    /// Centers the transform in a window of the given pixel size.
    pub fn for_window(width: u32, height: u32, scale: f32) -> Self {
        Self::new(width as f32 / 2.0, height as f32 / 2.0, scale)
    }

    /// World to screen pixels. Y flips because screen Y grows downward.
    /// Components come out as whole numbers.
    pub fn to_screen(&self, world: Point2) -> Point2 {
        pt2(
            self.center_x + (world.x * self.scale).round(),
            self.center_y - (world.y * self.scale).round(),
        )
    }

    /// Inverse of `to_screen`, exact up to pixel rounding.
    pub fn to_world(&self, screen: Point2) -> Point2 {
        pt2(
            (screen.x - self.center_x) / self.scale,
            (self.center_y - screen.y) / self.scale,
        )
    }
}
