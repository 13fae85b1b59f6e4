//! Turns egui's per-frame pointer state into ordered stick notifications

use egui::{PointerState, Pos2};

use crate::stick::{ActiveArea, PointerEvent};

/// Primary-button state for one frame, with the position already in stick space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
    /// egui has decided the current press is a drag rather than a click
    pub decided_drag: bool,
    pub position: Option<Pos2>,
}

impl PointerSample {
    /// Reads the primary button, mapping the pointer position with `to_stick`
    pub fn from_pointer(pointer: &PointerState, to_stick: impl Fn(Pos2) -> Pos2) -> Self {
        Self {
            pressed: pointer.primary_pressed(),
            released: pointer.primary_released(),
            down: pointer.primary_down(),
            decided_drag: pointer.is_decidedly_dragging(),
            position: pointer.interact_pos().map(to_stick),
        }
    }
}

/// Follows a single touch from press to release
///
/// Only presses that start inside the active area are followed. Once
/// followed, the touch keeps reporting even after it leaves the area.
#[derive(Debug, Default)]
pub struct PointerTracker {
    tracking: bool,
    dragging: bool,
    last_position: Pos2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Events for this frame, in delivery order
    pub fn update(&mut self, sample: PointerSample, area: &ActiveArea) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        if let Some(position) = sample.position {
            self.last_position = position;
        }
        let position = self.last_position;

        if sample.pressed && !self.tracking && sample.position.is_some() {
            if !area.contains(position) {
                return events;
            }
            self.tracking = true;
            events.push(PointerEvent::Down(position));
        }

        if !self.tracking {
            return events;
        }

        if !self.dragging && sample.down && sample.decided_drag {
            self.dragging = true;
            events.push(PointerEvent::DragBegin(position));
        }

        if self.dragging && sample.down {
            events.push(PointerEvent::Drag(position));
        }

        if sample.released || !sample.down {
            events.push(PointerEvent::Up(position));
            if self.dragging {
                events.push(PointerEvent::DragEnd(position));
            }
            self.tracking = false;
            self.dragging = false;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn area() -> ActiveArea {
        ActiveArea::new(0.0, 0.0, 100.0, 100.0)
    }

    fn press(x: f32, y: f32) -> PointerSample {
        PointerSample {
            pressed: true,
            down: true,
            position: Some(pos2(x, y)),
            ..Default::default()
        }
    }

    fn held(x: f32, y: f32, decided_drag: bool) -> PointerSample {
        PointerSample {
            down: true,
            decided_drag,
            position: Some(pos2(x, y)),
            ..Default::default()
        }
    }

    fn release(x: f32, y: f32) -> PointerSample {
        PointerSample {
            released: true,
            position: Some(pos2(x, y)),
            ..Default::default()
        }
    }

    #[test]
    fn test_press_outside_area_is_ignored() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.update(press(150.0, 50.0), &area()).is_empty());
        assert!(tracker.update(held(160.0, 50.0, true), &area()).is_empty());
        assert!(tracker.update(release(160.0, 50.0), &area()).is_empty());
    }

    #[test]
    fn test_max_edge_is_outside() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.update(press(100.0, 0.0), &area()).is_empty());
        assert_eq!(
            tracker.update(press(0.0, 0.0), &area()),
            vec![PointerEvent::Down(pos2(0.0, 0.0))]
        );
    }

    #[test]
    fn test_full_drag_sequence() {
        let mut tracker = PointerTracker::new();

        assert_eq!(
            tracker.update(press(50.0, 50.0), &area()),
            vec![PointerEvent::Down(pos2(50.0, 50.0))]
        );
        assert!(tracker.update(held(52.0, 50.0, false), &area()).is_empty());
        assert_eq!(
            tracker.update(held(60.0, 50.0, true), &area()),
            vec![
                PointerEvent::DragBegin(pos2(60.0, 50.0)),
                PointerEvent::Drag(pos2(60.0, 50.0)),
            ]
        );
        assert_eq!(
            tracker.update(held(180.0, 50.0, true), &area()),
            vec![PointerEvent::Drag(pos2(180.0, 50.0))]
        );
        assert_eq!(
            tracker.update(release(180.0, 50.0), &area()),
            vec![
                PointerEvent::Up(pos2(180.0, 50.0)),
                PointerEvent::DragEnd(pos2(180.0, 50.0)),
            ]
        );
        assert!(!tracker.is_tracking());
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_tap_within_one_frame() {
        let mut tracker = PointerTracker::new();
        let tap = PointerSample {
            pressed: true,
            released: true,
            position: Some(pos2(10.0, 10.0)),
            ..Default::default()
        };
        assert_eq!(
            tracker.update(tap, &area()),
            vec![
                PointerEvent::Down(pos2(10.0, 10.0)),
                PointerEvent::Up(pos2(10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn test_lost_position_reuses_last_known() {
        let mut tracker = PointerTracker::new();
        tracker.update(press(20.0, 20.0), &area());
        tracker.update(held(30.0, 20.0, true), &area());

        let gone = PointerSample {
            released: true,
            ..Default::default()
        };
        assert_eq!(
            tracker.update(gone, &area()),
            vec![
                PointerEvent::Up(pos2(30.0, 20.0)),
                PointerEvent::DragEnd(pos2(30.0, 20.0)),
            ]
        );
    }
}
