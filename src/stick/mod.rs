//! Virtual analog stick driven by pointer gestures
//!
//! Turns press, drag and release notifications inside an on-screen area into
//! a two-axis analog vector, falls back to physical axes when no gesture is
//! active, and animates the visible handle back to rest after release.
//!
//! # Architecture
//!
//! ```text
//! pointer events ──► [gesture]  ──┐
//!                                 ├──► StickState ──► axes (pull)
//! on_tick ──► [fallback] ─────────┘        │
//!        └──► [animator] ──────────────────┴──► HandleSink (visual position)
//! ```
//!
//! The gesture handler and the fallback poller never write in the same tick:
//! the poller stays inert while a pointer is down or a drag is running. The
//! animator only moves the visual handle and never touches the axes.

pub mod animator;
pub mod error;
pub mod fallback;
pub mod geometry;
pub mod gesture;
pub mod sink;
pub mod state;

use egui::{pos2, Pos2, Vec2};
use tracing::info;

use crate::config::StickConfig;

pub use error::StickError;
pub use fallback::{AxisName, AxisSource};
pub use geometry::ActiveArea;
pub use gesture::PointerEvent;
pub use sink::{DiscardSink, HandleSink};
pub use state::StickState;

/// The stick widget: one state record plus the sink its handle is drawn through
pub struct VirtualStick {
    state: StickState,
    area: ActiveArea,
    sink: Box<dyn HandleSink>,
}

impl VirtualStick {
    /// Builds a stick at rest, failing fast on a misconfigured area or duration
    ///
    /// The handle is placed at the rest position immediately so the sink
    /// starts out consistent with the state.
    pub fn new(config: &StickConfig, mut sink: Box<dyn HandleSink>) -> Result<Self, StickError> {
        config.validate()?;

        let origin = pos2(config.rest_position[0], config.rest_position[1]);
        let area = config.active_area;
        let state = StickState::new(origin, area.width, config.return_duration_secs);

        info!(
            "Virtual stick ready: rest ({:.1}, {:.1}), drag radius {:.1}, return {:.2}s",
            origin.x, origin.y, area.width, config.return_duration_secs
        );

        sink.place_handle(origin);
        Ok(Self { state, area, sink })
    }

    /// Per-frame update: fallback input first, then one animation step
    ///
    /// The animation runs last so that, while returning, its position is the
    /// final one the sink sees for this tick.
    pub fn on_tick(&mut self, elapsed_secs: f32, source: &mut dyn AxisSource) {
        self.poll_fallback(source);

        let position = self.state.with_reset(|phase| phase.step(elapsed_secs));
        if let Some(position) = position {
            self.state.place_handle(position, self.sink.as_mut());
        }
    }

    pub fn horizontal_axis(&self) -> f32 {
        self.state.horizontal_axis
    }

    pub fn vertical_axis(&self) -> f32 {
        self.state.vertical_axis
    }

    pub fn displacement(&self) -> Vec2 {
        self.state.displacement
    }

    pub fn origin(&self) -> Pos2 {
        self.state.origin
    }

    pub fn max_drag_length(&self) -> f32 {
        self.state.max_drag_length
    }

    /// Last position written to the sink
    pub fn visual_position(&self) -> Pos2 {
        self.state.visual_position
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn is_pointer_down(&self) -> bool {
        self.state.is_pointer_down
    }

    /// Whether a return animation is in flight
    pub fn is_returning(&self) -> bool {
        self.state.reset.is_animating()
    }

    pub fn reset_elapsed(&self) -> f32 {
        self.state.reset.elapsed_secs()
    }

    pub fn active_area(&self) -> ActiveArea {
        self.area
    }

    /// Whether a press at `position` belongs to this stick
    pub fn contains(&self, position: Pos2) -> bool {
        self.area.contains(position)
    }
}
