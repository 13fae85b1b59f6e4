//! Shared state record of the virtual stick

use egui::{Pos2, Vec2};
use tracing::debug;

use super::animator::ReturnPhase;
use super::geometry::clamp_to_radius;
use super::sink::HandleSink;

/// Everything the gesture handler, fallback poller and return animator share
///
/// `displacement` is the single source of truth for the axes: every write
/// goes through [`StickState::write_offset`], which clamps before assigning
/// and recomputes both axes. The only other axis write is the explicit snap
/// to zero at the end of a drag.
#[derive(Debug)]
pub struct StickState {
    pub(crate) origin: Pos2,
    pub(crate) max_drag_length: f32,
    pub(crate) max_drag_length_sq: f32,
    pub(crate) displacement: Vec2,
    pub(crate) horizontal_axis: f32,
    pub(crate) vertical_axis: f32,
    pub(crate) is_dragging: bool,
    pub(crate) is_pointer_down: bool,
    pub(crate) visual_position: Pos2,
    pub(crate) reset: ReturnPhase,
}

impl StickState {
    pub(crate) fn new(origin: Pos2, max_drag_length: f32, return_duration_secs: f32) -> Self {
        Self {
            origin,
            max_drag_length,
            max_drag_length_sq: max_drag_length * max_drag_length,
            displacement: Vec2::ZERO,
            horizontal_axis: 0.0,
            vertical_axis: 0.0,
            is_dragging: false,
            is_pointer_down: false,
            visual_position: origin,
            reset: ReturnPhase::new(origin, return_duration_secs),
        }
    }

    /// Clamped displacement write shared by every input path
    pub(crate) fn write_offset(&mut self, offset: Vec2, sink: &mut dyn HandleSink) {
        let clamped = clamp_to_radius(offset, self.max_drag_length, self.max_drag_length_sq);
        if clamped != offset {
            debug!(
                "Offset ({:.1}, {:.1}) beyond drag radius {:.1}, clamped to ({:.1}, {:.1})",
                offset.x, offset.y, self.max_drag_length, clamped.x, clamped.y
            );
        }

        self.displacement = clamped;
        self.horizontal_axis = clamped.x / self.max_drag_length;
        self.vertical_axis = clamped.y / self.max_drag_length;
        self.place_handle(self.origin + clamped, sink);
    }

    pub(crate) fn zero_axes(&mut self) {
        self.horizontal_axis = 0.0;
        self.vertical_axis = 0.0;
    }

    pub(crate) fn place_handle(&mut self, position: Pos2, sink: &mut dyn HandleSink) {
        self.visual_position = position;
        sink.place_handle(position);
    }

    /// Runs `f` on the animator slot, which is owned by value between states
    pub(crate) fn with_reset<T>(&mut self, f: impl FnOnce(ReturnPhase) -> (ReturnPhase, T)) -> T {
        let placeholder = ReturnPhase::new(self.origin, 0.0);
        let current = std::mem::replace(&mut self.reset, placeholder);
        let (next, output) = f(current);
        self.reset = next;
        output
    }

    pub(crate) fn cancel_reset(&mut self) {
        self.with_reset(|phase| (phase.cancel(), ()));
    }

    pub(crate) fn start_reset(&mut self) {
        let from = self.visual_position;
        self.with_reset(|phase| (phase.start(from), ()));
    }
}
