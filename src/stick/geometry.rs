//! Geometry helpers shared by the gesture and fallback write paths

use egui::{pos2, vec2, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned region in which presses belong to the stick
///
/// The width doubles as the drag radius of the handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ActiveArea {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open hit test: the min edges are inside, the max edges are not
    pub fn contains(&self, point: Pos2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn to_rect(&self) -> Rect {
        Rect::from_min_size(pos2(self.x, self.y), vec2(self.width, self.height))
    }
}

impl Default for ActiveArea {
    fn default() -> Self {
        Self::new(0.0, 0.0, 100.0, 100.0)
    }
}

/// Caps `offset` at `max_length` while keeping its direction
///
/// `max_length_sq` is the cached square of `max_length`, so offsets inside
/// the radius never pay for a square root. The result never lies outside
/// the radius, not even by a rounding step.
pub fn clamp_to_radius(offset: Vec2, max_length: f32, max_length_sq: f32) -> Vec2 {
    if offset.length_sq() <= max_length_sq {
        return offset;
    }

    let mut clamped = offset.normalized() * max_length;
    // Each step shrinks every nonzero component by at least one ulp
    while clamped.length_sq() > max_length_sq {
        clamped *= 1.0 - f32::EPSILON;
    }
    clamped
}

/// Caps a normalised axis pair at unit length while keeping its direction
pub fn clamp_to_unit(axes: Vec2) -> Vec2 {
    if axes.length_sq() > 1.0 {
        axes.normalized()
    } else {
        axes
    }
}

/// Replaces non-finite readings with zero and limits the rest to [-1, 1]
pub fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
