//! Physical axis sources for the fallback poller
//!
//! Every source reports normalised readings in [-1, 1] with positive
//! `Vertical` meaning up. Out-of-range or non-finite values are tolerated;
//! the stick sanitises whatever it reads.

pub mod gamepad;
pub mod keyboard;

use crate::stick::{AxisName, AxisSource};

pub use gamepad::{GamepadReader, InputError, LeftStick, Polling, DEFAULT_DEADZONE};
pub use keyboard::KeyboardAxes;

/// Fixed readings, for hosts without any input device
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StaticAxes {
    pub horizontal: f32,
    pub vertical: f32,
}

impl StaticAxes {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl AxisSource for StaticAxes {
    fn read_axis(&mut self, axis: AxisName) -> f32 {
        match axis {
            AxisName::Horizontal => self.horizontal,
            AxisName::Vertical => self.vertical,
        }
    }
}

/// Reads several sources and keeps, per axis, the strongest reading
///
/// On equal magnitude the source added first wins, so a keyboard layered
/// over an idle gamepad behaves like the keyboard alone.
#[derive(Default)]
pub struct MergedAxes<'a> {
    sources: Vec<&'a mut dyn AxisSource>,
}

impl<'a> MergedAxes<'a> {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub fn with(mut self, source: &'a mut dyn AxisSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl AxisSource for MergedAxes<'_> {
    fn read_axis(&mut self, axis: AxisName) -> f32 {
        let mut strongest = 0.0_f32;
        for source in self.sources.iter_mut() {
            let value = source.read_axis(axis);
            // NaN never compares greater, so it cannot displace a real reading
            if value.abs() > strongest.abs() {
                strongest = value;
            }
        }
        strongest
    }
}
