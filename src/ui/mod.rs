//! # Touchstick host
//!
//! An eframe application that hosts a single [`VirtualStick`]. Each frame it
//! plays the role of the event system the stick expects:
//!
//! 1. pointer samples are turned into ordered notifications and dispatched
//! 2. the stick is ticked with the frame's stable delta and a source merging
//!    keyboard and gamepad axes
//! 3. the handle is painted at the last position published on the watch channel
//!
//! The stick itself never talks to egui; the canvas maps between screen
//! space and stick space at the edges.

pub mod canvas;
pub mod common;
pub mod pointer;

use eframe::egui::{self, Align2, FontId, Pos2, Rect, Sense, Stroke, StrokeKind};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::input::{GamepadReader, KeyboardAxes, MergedAxes, Polling};
use crate::stick::VirtualStick;

use self::canvas::StickCanvas;
use self::common::{create_frame, UiColors};
use self::pointer::{PointerSample, PointerTracker};

const HANDLE_RADIUS: f32 = 14.0;

pub struct StickDemoApp {
    stick: VirtualStick,

    /// Latest handle position published by the stick's sink
    handle: watch::Receiver<Pos2>,

    tracker: PointerTracker,

    /// Absent when gilrs could not be initialised
    gamepad: Option<GamepadReader<Polling>>,
}

impl StickDemoApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        stick: VirtualStick,
        handle: watch::Receiver<Pos2>,
        gamepad: Option<GamepadReader<Polling>>,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        info!(
            "Starting stick host (gamepad input {})",
            if gamepad.is_some() { "enabled" } else { "disabled" }
        );
        Self {
            stick,
            handle,
            tracker: PointerTracker::new(),
            gamepad,
        }
    }

    /// Stick-space rectangle that has to stay visible
    fn stick_bounds(&self) -> Rect {
        let radius = self.stick.max_drag_length();
        Rect::from_center_size(self.stick.origin(), egui::vec2(radius, radius) * 2.0)
            .union(self.stick.active_area().to_rect())
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, canvas: &StickCanvas) {
        let sample = ctx.input(|i| {
            let mut sample = PointerSample::from_pointer(&i.pointer, |p| canvas.to_stick(p));
            // Presses over other panels never reach the stick
            if sample.pressed {
                let on_canvas = i
                    .pointer
                    .interact_pos()
                    .is_some_and(|p| canvas.screen().contains(p));
                sample.pressed = on_canvas;
            }
            sample
        });

        for event in self.tracker.update(sample, &self.stick.active_area()) {
            debug!("Dispatching {:?}", event);
            self.stick.dispatch(event);
        }
    }

    fn tick(&mut self, ctx: &egui::Context) {
        let dt = ctx.input(|i| i.stable_dt);
        let mut keyboard = ctx.input(KeyboardAxes::from_input);

        let mut source = MergedAxes::new().with(&mut keyboard);
        if let Some(gamepad) = self.gamepad.as_mut() {
            gamepad.pump();
            source = source.with(gamepad);
        }

        self.stick.on_tick(dt, &mut source);
    }

    fn paint(&self, painter: &egui::Painter, canvas: &StickCanvas) {
        let area = canvas.rect_to_screen(self.stick.active_area().to_rect());
        painter.rect_stroke(area, 0.0, Stroke::new(1.0, UiColors::BORDER), StrokeKind::Inside);

        let origin = canvas.to_screen(self.stick.origin());
        let radius = self.stick.max_drag_length() * canvas.scale();
        painter.circle_stroke(origin, radius, Stroke::new(2.0, UiColors::RING));

        let handle = canvas.to_screen(*self.handle.borrow());
        let color = if self.stick.is_returning() || self.stick.displacement() == egui::Vec2::ZERO {
            UiColors::INACTIVE
        } else {
            UiColors::ACTIVE
        };
        painter.line_segment([origin, handle], Stroke::new(2.0, UiColors::RING));
        painter.circle_filled(handle, HANDLE_RADIUS, color);
    }

    fn status(&self, ui: &mut egui::Ui) {
        let gamepad = match self.gamepad.as_ref().and_then(|g| g.active_gamepad()) {
            Some(id) => format!("Gamepad {}", id),
            None => "No gamepad".to_string(),
        };
        let phase = if self.stick.is_dragging() {
            "Dragging"
        } else if self.stick.is_pointer_down() {
            "Pressed"
        } else if self.stick.is_returning() {
            "Returning"
        } else {
            "Idle"
        };

        ui.horizontal_centered(|ui| {
            ui.label(format!("Horizontal: {:+.2}", self.stick.horizontal_axis()));
            ui.label(format!("Vertical: {:+.2}", self.stick.vertical_axis()));
            ui.separator();
            ui.label(phase);
            ui.separator();
            ui.label(gamepad);
        });
    }
}

impl eframe::App for StickDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint_after(Duration::from_millis(33));

        egui::TopBottomPanel::bottom("status_panel")
            .frame(create_frame(UiColors::MAIN_BG, UiColors::BORDER))
            .show(ctx, |ui| self.status(ui));

        egui::CentralPanel::default()
            .frame(create_frame(UiColors::INNER_BG, UiColors::BORDER))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let canvas = StickCanvas::fit(response.rect, self.stick_bounds());

                self.handle_pointer(ctx, &canvas);
                self.tick(ctx);
                self.paint(&painter, &canvas);

                painter.text(
                    response.rect.left_top() + egui::vec2(8.0, 8.0),
                    Align2::LEFT_TOP,
                    "Drag inside the box, or use WASD / arrows / gamepad",
                    FontId::proportional(14.0),
                    UiColors::RING,
                );
            });

        if self.stick.is_returning() || self.tracker.is_tracking() {
            ctx.request_repaint();
        }
    }
}
