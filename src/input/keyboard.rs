//! Digital axes from the keyboard
//!
//! Mirrors the classic "Horizontal"/"Vertical" virtual axes: WASD and the
//! arrow keys, each direction reading a full -1 or 1, opposite keys
//! cancelling out.

use egui::{InputState, Key};

use crate::stick::{AxisName, AxisSource};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct KeyboardAxes {
    horizontal: f32,
    vertical: f32,
}

impl KeyboardAxes {
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Self {
        Self {
            horizontal: digital(right) - digital(left),
            vertical: digital(up) - digital(down),
        }
    }

    /// Snapshot of the held keys for the current frame
    pub fn from_input(input: &InputState) -> Self {
        let held = |keys: [Key; 2]| keys.iter().any(|key| input.key_down(*key));
        Self::from_keys(
            held([Key::A, Key::ArrowLeft]),
            held([Key::D, Key::ArrowRight]),
            held([Key::W, Key::ArrowUp]),
            held([Key::S, Key::ArrowDown]),
        )
    }

    pub fn is_idle(&self) -> bool {
        self.horizontal == 0.0 && self.vertical == 0.0
    }
}

fn digital(pressed: bool) -> f32 {
    if pressed {
        1.0
    } else {
        0.0
    }
}

impl AxisSource for KeyboardAxes {
    fn read_axis(&mut self, axis: AxisName) -> f32 {
        match axis {
            AxisName::Horizontal => self.horizontal,
            AxisName::Vertical => self.vertical,
        }
    }
}
