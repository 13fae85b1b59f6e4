//! Construction errors for the virtual stick

/// Errors raised while building a [`VirtualStick`](super::VirtualStick)
///
/// Runtime input never fails: out-of-area positions are clamped and
/// inconsistent event sequences are absorbed by the state flags. Only a
/// misconfigured stick is rejected, and it is rejected at construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StickError {
    /// The active area width (the drag radius) must be finite and positive
    #[error("Invalid drag length {0}: the active area width must be finite and greater than zero")]
    InvalidDragLength(f32),

    /// The return duration must be finite and not negative
    #[error("Invalid return duration {0}s: must be finite and not negative")]
    InvalidReturnDuration(f32),

    /// The active area needs a finite corner and a finite, non-negative height
    #[error("Invalid active area at ({0}, {1}) with height {2}: values must be finite and the height not negative")]
    InvalidActiveArea(f32, f32, f32),

    /// The rest position must have finite coordinates
    #[error("Invalid rest position ({0}, {1}): coordinates must be finite")]
    InvalidRestPosition(f32, f32),
}
