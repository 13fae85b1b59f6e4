use gilrs::{Axis, Event, EventType, Gamepad, GamepadId, Gilrs};
use statum::{machine, state};
use tracing::{debug, error, info, warn};

use crate::stick::{AxisName, AxisSource};

/// Deadzone applied to the left stick unless configured otherwise
pub const DEFAULT_DEADZONE: f32 = 0.05;

// Gamepad errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to initialize gamepad input: {0}")]
    GamepadInit(String),
}

// Last known left stick values, after the deadzone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeftStick {
    pub x: f32,
    pub y: f32,
    deadzone: f32,
}

impl LeftStick {
    pub fn new(deadzone: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            deadzone,
        }
    }

    // Returns whether the axis belongs to the left stick
    pub fn apply(&mut self, axis: Axis, value: f32) -> bool {
        let new_value = apply_deadzone(value, self.deadzone);
        match axis {
            Axis::LeftStickX => {
                if (new_value - self.x).abs() > 0.05 {
                    debug!("Left stick X: {:.4} -> {:.4}", self.x, new_value);
                }
                self.x = new_value;
                true
            }
            Axis::LeftStickY => {
                if (new_value - self.y).abs() > 0.05 {
                    debug!("Left stick Y: {:.4} -> {:.4}", self.y, new_value);
                }
                self.y = new_value;
                true
            }
            _ => false,
        }
    }

    pub fn center(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }
}

// Reader lifecycle
#[state]
#[derive(Debug, Clone)]
pub enum ReaderState {
    Initializing,
    Polling,
}

#[machine]
#[derive(Debug)]
pub struct GamepadReader<S: ReaderState> {
    // Gilrs context
    gilrs: Gilrs,

    // Gamepad whose left stick feeds the axes
    active_gamepad: Option<GamepadId>,

    // Current left stick reading
    left_stick: LeftStick,
}

impl<S: ReaderState> GamepadReader<S> {
    pub fn active_gamepad(&self) -> Option<GamepadId> {
        self.active_gamepad
    }
}

impl GamepadReader<Initializing> {
    pub fn create(deadzone: f32) -> Result<Self, InputError> {
        info!("Initializing gilrs gamepad interface");
        let gilrs = match Gilrs::new() {
            Ok(g) => {
                info!("Successfully initialized gilrs");
                g
            }
            Err(e) => {
                error!("Failed to initialize gilrs: {}", e);
                return Err(InputError::GamepadInit(e.to_string()));
            }
        };

        Ok(Self::new(gilrs, None, LeftStick::new(deadzone)))
    }

    // Pick the first connected gamepad and start polling
    pub fn initialize(mut self) -> GamepadReader<Polling> {
        let gamepads: Vec<(GamepadId, Gamepad<'_>)> = self.gilrs.gamepads().collect();

        if gamepads.is_empty() {
            warn!("No gamepad connected, waiting for one");
        } else {
            info!("Found {} gamepads:", gamepads.len());
            for (idx, (id, gamepad)) in gamepads.iter().enumerate() {
                info!("  [{}] ID: {}, Name: {}", idx, id, gamepad.name());
            }
            let (id, gamepad) = &gamepads[0];
            self.active_gamepad = Some(*id);
            info!("Selected gamepad: {} ({})", gamepad.name(), id);
        }

        self.transition()
    }
}

impl GamepadReader<Polling> {
    /// Drains pending gilrs events, returning how many were handled
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            self.handle_event(id, event);
            handled += 1;
        }
        handled
    }

    fn handle_event(&mut self, id: GamepadId, event: EventType) {
        match event {
            EventType::Connected => {
                if self.active_gamepad.is_none() {
                    info!("Gamepad {} connected, selecting it", id);
                    self.active_gamepad = Some(id);
                }
            }
            EventType::Disconnected => {
                if self.active_gamepad == Some(id) {
                    warn!("Active gamepad {} disconnected", id);
                    self.active_gamepad = None;
                    self.left_stick.center();
                }
            }
            EventType::AxisChanged(axis, value, _) => {
                if self.active_gamepad != Some(id) {
                    debug!("Skipping axis event from non-active gamepad: {:?}", id);
                    return;
                }
                self.left_stick.apply(axis, value);
            }
            _ => {}
        }
    }
}

impl AxisSource for GamepadReader<Polling> {
    fn read_axis(&mut self, axis: AxisName) -> f32 {
        match axis {
            AxisName::Horizontal => self.left_stick.x,
            AxisName::Vertical => self.left_stick.y,
        }
    }
}

// Apply deadzone to analog values
fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    if value.abs() < deadzone {
        0.0
    } else {
        // Rescale the value to the range outside the deadzone
        let sign = if value < 0.0 { -1.0 } else { 1.0 };
        sign * (value.abs() - deadzone) / (1.0 - deadzone)
    }
}
