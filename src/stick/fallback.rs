//! Physical-axis fallback used while no gesture is active

use egui::vec2;
use tracing::warn;

use super::geometry::{clamp_to_unit, sanitize_axis};
use super::VirtualStick;

/// Named axes the fallback reads once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisName {
    Horizontal,
    Vertical,
}

impl AxisName {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisName::Horizontal => "Horizontal",
            AxisName::Vertical => "Vertical",
        }
    }
}

/// Device-level reader of normalised axis values in [-1, 1]
pub trait AxisSource {
    fn read_axis(&mut self, axis: AxisName) -> f32;
}

impl VirtualStick {
    /// Feeds physical axes through the drag write path when no gesture is active
    ///
    /// Returns whether anything was written. Gesture input always takes
    /// priority: while a pointer is down or a drag is running this does not
    /// even read the source.
    pub fn poll_fallback(&mut self, source: &mut dyn AxisSource) -> bool {
        if self.state.is_dragging || self.state.is_pointer_down {
            return false;
        }

        let horizontal = read_sanitized(source, AxisName::Horizontal);
        let vertical = read_sanitized(source, AxisName::Vertical);

        let axes = clamp_to_unit(vec2(horizontal, vertical));
        let offset = axes * self.state.max_drag_length;
        self.state.write_offset(offset, self.sink.as_mut());
        true
    }
}

fn read_sanitized(source: &mut dyn AxisSource, axis: AxisName) -> f32 {
    let raw = source.read_axis(axis);
    let value = sanitize_axis(raw);
    if value != raw {
        warn!("{} axis reported {}, using {}", axis.as_str(), raw, value);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StickConfig;
    use crate::input::StaticAxes;
    use egui::{pos2, Pos2};
    use tokio::sync::watch;

    const EPSILON: f32 = 1e-4;

    /// Counts reads so tests can prove the source was never consulted
    #[derive(Default)]
    struct CountingAxes {
        reads: usize,
    }

    impl AxisSource for CountingAxes {
        fn read_axis(&mut self, _axis: AxisName) -> f32 {
            self.reads += 1;
            1.0
        }
    }

    fn stick() -> (VirtualStick, watch::Receiver<Pos2>) {
        let config = StickConfig {
            rest_position: [0.0, 0.0],
            ..StickConfig::default()
        };
        let (sender, receiver) = watch::channel(Pos2::ZERO);
        let stick = VirtualStick::new(&config, Box::new(sender)).unwrap();
        (stick, receiver)
    }

    #[test]
    fn test_fallback_scenario() {
        let (mut stick, handle) = stick();
        let mut source = StaticAxes::new(0.3, 0.4);

        assert!(stick.poll_fallback(&mut source));
        assert!((stick.displacement().x - 30.0).abs() < EPSILON);
        assert!((stick.displacement().y - 40.0).abs() < EPSILON);
        assert!((stick.horizontal_axis() - 0.3).abs() < EPSILON);
        assert!((stick.vertical_axis() - 0.4).abs() < EPSILON);
        assert!((handle.borrow().x - 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_fallback_normalizes_diagonal() {
        let (mut stick, _handle) = stick();
        let mut source = StaticAxes::new(1.0, 1.0);

        stick.poll_fallback(&mut source);
        let displacement = stick.displacement();
        assert!((displacement.length() - stick.max_drag_length()).abs() < EPSILON);
        assert!((displacement.x - displacement.y).abs() < EPSILON);
        assert!((stick.horizontal_axis() - displacement.x / 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_fallback_inert_while_pointer_down() {
        let (mut stick, _handle) = stick();
        let mut source = CountingAxes::default();

        stick.on_pointer_down(pos2(10.0, 0.0));
        assert!(!stick.poll_fallback(&mut source));
        assert_eq!(source.reads, 0);
        assert!((stick.horizontal_axis() - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_fallback_inert_while_dragging() {
        let (mut stick, _handle) = stick();
        let mut source = CountingAxes::default();

        stick.on_drag_begin(pos2(10.0, 0.0));
        stick.on_drag(pos2(0.0, 20.0));
        for _ in 0..10 {
            stick.on_tick(0.016, &mut source);
        }
        assert_eq!(source.reads, 0);
        assert!((stick.vertical_axis() - 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_fallback_resumes_after_release() {
        let (mut stick, _handle) = stick();
        let mut source = CountingAxes::default();

        stick.on_pointer_down(pos2(10.0, 0.0));
        stick.on_drag_begin(pos2(10.0, 0.0));
        stick.on_pointer_up(pos2(10.0, 0.0));
        assert!(!stick.poll_fallback(&mut source));

        stick.on_drag_end(pos2(10.0, 0.0));
        assert!(stick.poll_fallback(&mut source));
        assert_eq!(source.reads, 2);
    }

    #[test]
    fn test_fallback_sanitizes_readings() {
        let (mut stick, _handle) = stick();
        let mut source = StaticAxes::new(f32::NAN, -5.0);

        stick.poll_fallback(&mut source);
        assert_eq!(stick.horizontal_axis(), 0.0);
        assert_eq!(stick.vertical_axis(), -1.0);
    }

    #[test]
    fn test_axis_names() {
        assert_eq!(AxisName::Horizontal.as_str(), "Horizontal");
        assert_eq!(AxisName::Vertical.as_str(), "Vertical");
    }
}
