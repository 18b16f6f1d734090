//! egui renderer for the application UI.

mod input_panel;
mod quick_tips_panel;
mod result_panel;
mod status_bar;
pub mod style;
mod tip_panel;

use crate::egui_app::controller::AnalyzerController;
use crate::egui_app::view_model;
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Vec2};
use std::sync::Arc;
use std::time::Duration;

/// Minimum window size the layout is designed for.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(560.0, 640.0);

/// Repaint cadence while an analysis runs, so the worker result and the
/// timeout are noticed without user input.
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

const CONTENT_MAX_WIDTH: f32 = 880.0;

/// Renders the analyzer using the shared controller state.
pub struct EguiApp {
    controller: AnalyzerController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: AnalyzerController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let submit = ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));
        if submit {
            self.controller.trigger();
        }
        let cancel = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if cancel && self.controller.in_progress() {
            self.controller.cancel_analysis();
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new("TruthLens AI")
                    .size(30.0)
                    .strong()
                    .color(palette.accent),
            );
            ui.label(
                RichText::new(view_model::APP_SUBTITLE).color(palette.text_muted),
            );
            ui.add_space(12.0);
        });
    }

    fn render_center(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let side = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(side);
                    ui.vertical(|ui| {
                        ui.set_max_width(CONTENT_MAX_WIDTH);
                        self.render_header(ui);
                        self.render_input_panel(ui);
                        ui.add_space(16.0);
                        self.render_error(ui);
                        let result = self.controller.current_result().map(Arc::as_ref);
                        if view_model::show_quick_tips(result) {
                            quick_tips_panel::render(ui);
                        } else if let Some(view) = self.controller.result_view() {
                            result_panel::render(ui, &view);
                            ui.add_space(16.0);
                            tip_panel::render(ui, &view.tip);
                        }
                        ui.add_space(24.0);
                    });
                });
            });
    }

    fn render_error(&mut self, ui: &mut egui::Ui) {
        let Some(error) = self.controller.last_error() else {
            return;
        };
        let palette = style::palette();
        let heading = view_model::error_heading(error);
        let message = error.to_string();
        card_frame()
            .stroke(egui::Stroke::new(1.0, palette.destructive))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(heading).strong().color(palette.destructive));
                ui.label(message);
            });
        ui.add_space(16.0);
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.handle_shortcuts(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| self.render_center(ui));
        if self.controller.in_progress() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }
}

/// Rounded card used by every section of the page.
pub(crate) fn card_frame() -> Frame {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_card)
        .stroke(style::card_stroke())
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(16))
}
