//! Outbound side of the stick: where the handle gets drawn

use egui::Pos2;
use tokio::sync::watch;

/// Receives every position the visible handle should move to
///
/// The stick only computes positions; whatever owns the visible element
/// implements this and applies them.
pub trait HandleSink {
    fn place_handle(&mut self, position: Pos2);
}

/// Publishes the latest handle position to any number of readers
///
/// Readers only ever need the most recent position, so a watch channel fits:
/// sending never blocks and needs no runtime.
impl HandleSink for watch::Sender<Pos2> {
    fn place_handle(&mut self, position: Pos2) {
        self.send_replace(position);
    }
}

/// Sink for hosts that only consume the axis values
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl HandleSink for DiscardSink {
    fn place_handle(&mut self, _position: Pos2) {}
}
