//! Pointer and drag notifications
//!
//! The host delivers these in event order for a single continuous touch.
//! Each handler only looks at the current flags, so an unmatched or
//! repeated notification leaves the stick in a consistent state instead of
//! failing.

use egui::Pos2;
use tracing::{debug, trace};

use super::VirtualStick;

/// One pointer notification, for hosts that queue input before applying it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Pos2),
    Up(Pos2),
    DragBegin(Pos2),
    Drag(Pos2),
    DragEnd(Pos2),
}

impl VirtualStick {
    /// Routes a queued notification to its handler
    pub fn dispatch(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(position) => self.on_pointer_down(position),
            PointerEvent::Up(position) => self.on_pointer_up(position),
            PointerEvent::DragBegin(position) => self.on_drag_begin(position),
            PointerEvent::Drag(position) => self.on_drag(position),
            PointerEvent::DragEnd(position) => self.on_drag_end(position),
        }
    }

    /// Moves the handle under the pointer right away, before any drag starts
    pub fn on_pointer_down(&mut self, position: Pos2) {
        debug!("Pointer down at ({:.1}, {:.1})", position.x, position.y);
        self.state.is_pointer_down = true;
        self.state.cancel_reset();

        let offset = position - self.state.origin;
        self.state.write_offset(offset, self.sink.as_mut());
    }

    pub fn on_pointer_up(&mut self, position: Pos2) {
        debug!("Pointer up at ({:.1}, {:.1})", position.x, position.y);
        self.state.is_pointer_down = false;

        // The matching drag-end owns the reset
        if self.state.is_dragging {
            return;
        }

        self.state.start_reset();
    }

    pub fn on_drag_begin(&mut self, position: Pos2) {
        debug!("Drag begin at ({:.1}, {:.1})", position.x, position.y);
        self.state.is_dragging = true;
        self.state.cancel_reset();
    }

    pub fn on_drag(&mut self, position: Pos2) {
        trace!("Drag at ({:.1}, {:.1})", position.x, position.y);
        let offset = position - self.state.origin;
        self.state.write_offset(offset, self.sink.as_mut());
    }

    /// Reports zero movement immediately; the handle follows via the return animation
    pub fn on_drag_end(&mut self, position: Pos2) {
        debug!("Drag end at ({:.1}, {:.1})", position.x, position.y);
        self.state.zero_axes();
        self.state.is_dragging = false;
        self.state.start_reset();
    }
}
