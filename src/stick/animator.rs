//! Return animation that eases the handle back to its rest position
//!
//! Progress is accumulated from the elapsed time of every tick rather than
//! counted in frames, so the animation lasts the configured duration no
//! matter how irregular the host's frame rate is.
//!
//! # State Machine
//!
//! ```text
//! Idle ──start──► Animating ──tick (t < 1)──► Animating
//!  ▲                  │
//!  └──── t == 1 ──────┤
//!  └──── cancel ──────┘
//! ```
//!
//! An animator in the `Animating` state is the handle to the running
//! animation: dropping back to `Idle` is the only way to stop it.

use egui::Pos2;
use statum::{machine, state};
use tracing::{debug, trace};

/// Where the running animation started from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnTrip {
    pub from: Pos2,
}

#[state]
#[derive(Debug, Clone)]
pub enum ReturnState {
    Idle,
    Animating(ReturnTrip),
}

#[machine]
#[derive(Debug)]
pub struct ReturnAnimator<S: ReturnState> {
    // Rest position the handle returns to
    origin: Pos2,

    // Configured length of one return, in seconds
    duration_secs: f32,

    // Time accumulated since the current return started
    elapsed_secs: f32,
}

impl<S: ReturnState> ReturnAnimator<S> {
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }
}

impl ReturnAnimator<Idle> {
    pub fn create(origin: Pos2, duration_secs: f32) -> Self {
        Self::new(origin, duration_secs, 0.0)
    }

    /// Begins a fresh return from `from`, resetting the accumulated time
    pub fn start(mut self, from: Pos2) -> ReturnAnimator<Animating> {
        debug!(
            "Starting return animation from ({:.1}, {:.1}) over {:.2}s",
            from.x, from.y, self.duration_secs
        );
        self.elapsed_secs = 0.0;
        self.transition_with(ReturnTrip { from })
    }
}

/// Outcome of advancing a running animation by one tick
#[derive(Debug)]
pub enum ReturnStep {
    /// Still on the way; `position` is where the handle belongs this tick
    Running {
        animator: ReturnAnimator<Animating>,
        position: Pos2,
    },
    /// Arrived; `position` is exactly the rest position
    Finished {
        animator: ReturnAnimator<Idle>,
        position: Pos2,
    },
}

impl ReturnAnimator<Animating> {
    pub fn source(&self) -> Pos2 {
        match self.get_state_data() {
            Some(trip) => trip.from,
            None => self.origin,
        }
    }

    /// Interpolation factor in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
    }

    /// Accumulates `dt` seconds and computes this tick's handle position
    ///
    /// Negative or non-finite deltas add nothing.
    pub fn advance(mut self, dt: f32) -> ReturnStep {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed_secs += dt;
        }

        let t = self.progress();
        if t >= 1.0 {
            let position = self.origin;
            debug!("Return animation finished after {:.3}s", self.elapsed_secs);
            return ReturnStep::Finished {
                animator: self.transition(),
                position,
            };
        }

        let from = self.source();
        let position = from + (self.origin - from) * t;
        trace!(
            "Return animation t={:.3} -> ({:.1}, {:.1})",
            t,
            position.x,
            position.y
        );
        ReturnStep::Running {
            animator: self,
            position,
        }
    }

    pub fn cancel(self) -> ReturnAnimator<Idle> {
        debug!(
            "Cancelling return animation at {:.3}s of {:.3}s",
            self.elapsed_secs, self.duration_secs
        );
        self.transition()
    }
}

/// Owned slot for the animator, whichever state it is in
#[derive(Debug)]
pub enum ReturnPhase {
    Idle(ReturnAnimator<Idle>),
    Animating(ReturnAnimator<Animating>),
}

impl ReturnPhase {
    pub fn new(origin: Pos2, duration_secs: f32) -> Self {
        Self::Idle(ReturnAnimator::create(origin, duration_secs))
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating(_))
    }

    pub fn elapsed_secs(&self) -> f32 {
        match self {
            Self::Idle(animator) => animator.elapsed_secs(),
            Self::Animating(animator) => animator.elapsed_secs(),
        }
    }

    /// Stops a running animation; a no-op when already idle
    pub fn cancel(self) -> Self {
        Self::Idle(self.into_idle())
    }

    /// Replaces any running animation with a new one starting at `from`
    pub fn start(self, from: Pos2) -> Self {
        Self::Animating(self.into_idle().start(from))
    }

    /// Advances by `dt`, returning the handle position to draw if animating
    pub fn step(self, dt: f32) -> (Self, Option<Pos2>) {
        match self {
            Self::Idle(animator) => (Self::Idle(animator), None),
            Self::Animating(animator) => match animator.advance(dt) {
                ReturnStep::Running { animator, position } => {
                    (Self::Animating(animator), Some(position))
                }
                ReturnStep::Finished { animator, position } => {
                    (Self::Idle(animator), Some(position))
                }
            },
        }
    }

    fn into_idle(self) -> ReturnAnimator<Idle> {
        match self {
            Self::Idle(animator) => animator,
            Self::Animating(animator) => animator.cancel(),
        }
    }
}
