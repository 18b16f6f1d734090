use super::style;
use super::{EguiApp, card_frame};
use crate::egui_app::view_model;
use eframe::egui::{self, RichText};

impl EguiApp {
    pub(super) fn render_input_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(view_model::INPUT_TITLE).size(18.0).strong());
            ui.label(
                RichText::new(view_model::INPUT_DESCRIPTION).color(palette.text_muted),
            );
            ui.add_space(8.0);

            let in_progress = self.controller.in_progress();
            let mut text = self.controller.input_text().to_string();
            let response = ui.add(
                egui::TextEdit::multiline(&mut text)
                    .hint_text(view_model::INPUT_HINT)
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );
            if self.controller.ui.focus_input_requested {
                response.request_focus();
                self.controller.ui.focus_input_requested = false;
            }
            if response.changed() {
                self.controller.set_text(text);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if self.controller.ui.show_character_count {
                    let count = view_model::character_count_label(self.controller.input_text());
                    ui.label(RichText::new(count).small().color(palette.text_muted));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_trigger_controls(ui, in_progress);
                });
            });
        });
    }

    fn render_trigger_controls(&mut self, ui: &mut egui::Ui, in_progress: bool) {
        let label = view_model::trigger_label(in_progress);
        let button = egui::Button::new(RichText::new(label).strong())
            .fill(style::palette().trust)
            .min_size(egui::vec2(150.0, 32.0));
        if ui
            .add_enabled(self.controller.is_triggerable(), button)
            .on_hover_text("Ctrl+Enter")
            .clicked()
        {
            self.controller.trigger();
        }
        if in_progress {
            if ui.button("Cancel").on_hover_text("Esc").clicked() {
                self.controller.cancel_analysis();
            }
            ui.add(egui::Spinner::new());
            if let Some(elapsed) = self.controller.analysis_elapsed() {
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .small()
                        .color(style::palette().text_muted),
                );
            }
        }
    }
}
