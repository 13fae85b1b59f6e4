//! Shared styling for the stick host

use eframe::egui::{Color32, Frame, Stroke};

/// Creates a styled frame with consistent margins and border.
pub fn create_frame(bg_color: Color32, border_color: Color32) -> Frame {
    Frame::new()
        .stroke(Stroke::new(1.0, border_color))
        .fill(bg_color)
        .inner_margin(4)
        .outer_margin(2)
}

/// Dark theme palette.
pub struct UiColors;

impl UiColors {
    /// Primary background color for main content areas
    pub const MAIN_BG: Color32 = Color32::from_rgb(30, 30, 30);

    /// Background of the stick canvas
    pub const INNER_BG: Color32 = Color32::from_rgb(25, 25, 25);

    /// Border color for component separation
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 60);

    /// Outline of the drag radius around the rest position
    pub const RING: Color32 = Color32::from_rgb(90, 90, 90);

    /// Handle while a gesture or device input is moving it
    pub const ACTIVE: Color32 = Color32::from_rgb(50, 200, 20);

    /// Handle at rest or returning
    pub const INACTIVE: Color32 = Color32::from_rgb(200, 50, 20);
}
