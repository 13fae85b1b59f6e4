//! Mapping between egui screen space and stick space
//!
//! Screen space grows downwards while stick space grows upwards, so the
//! vertical axis reads positive when the handle is pushed up.

use egui::{pos2, vec2, Pos2, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickCanvas {
    screen: Rect,
    bounds: Rect,
    scale: f32,
}

impl StickCanvas {
    /// Fits `bounds` (stick space) centred into `screen`, keeping the aspect ratio
    pub fn fit(screen: Rect, bounds: Rect) -> Self {
        let scale_x = screen.width() / bounds.width().max(f32::EPSILON);
        let scale_y = screen.height() / bounds.height().max(f32::EPSILON);
        let scale = scale_x.min(scale_y).max(f32::EPSILON);
        Self {
            screen,
            bounds,
            scale,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn to_screen(&self, point: Pos2) -> Pos2 {
        let offset = point - self.bounds.center();
        self.screen.center() + vec2(offset.x, -offset.y) * self.scale
    }

    pub fn to_stick(&self, point: Pos2) -> Pos2 {
        let offset = (point - self.screen.center()) / self.scale;
        pos2(
            self.bounds.center().x + offset.x,
            self.bounds.center().y - offset.y,
        )
    }

    /// Screen rectangle covering a stick-space rectangle
    pub fn rect_to_screen(&self, rect: Rect) -> Rect {
        Rect::from_two_pos(self.to_screen(rect.min), self.to_screen(rect.max))
    }
}
