//! Credibility result card.

use super::card_frame;
use super::style;
use crate::egui_app::view_model::{AnalysisView, NO_SOURCES_TEXT, SourcesView};
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText};

pub(super) fn render(ui: &mut egui::Ui, view: &AnalysisView) {
    let palette = style::palette();
    let status_color = style::status_color(view.status);
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            pill(ui, view.status_label, status_color);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(&view.score_label)
                        .size(22.0)
                        .strong()
                        .color(style::band_color(view.band)),
                );
                ui.label(RichText::new("Credibility Score").color(palette.text_muted));
            });
        });
        ui.add_space(6.0);
        ui.add(
            egui::ProgressBar::new(view.score_fraction)
                .fill(style::band_color(view.band))
                .desired_height(8.0),
        );

        ui.add_space(14.0);
        section_heading(ui, "AI Analysis Explanation");
        ui.label(&view.explanation);

        if !view.red_flags.is_empty() {
            ui.add_space(14.0);
            section_heading(ui, "Warning Signs Detected");
            for flag in &view.red_flags {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("⚠").color(palette.warning));
                    ui.label(flag);
                });
            }
        }

        ui.add_space(14.0);
        section_heading(ui, "Sources Referenced");
        match &view.sources {
            SourcesView::Listed(sources) => {
                ui.horizontal_wrapped(|ui| {
                    for source in sources {
                        pill(ui, source, palette.trust);
                    }
                });
            }
            SourcesView::NoneFound => {
                ui.label(RichText::new(NO_SOURCES_TEXT).italics().color(palette.text_muted));
            }
        }
    });
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).strong().size(15.0));
    ui.add_space(4.0);
}

fn pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    Frame::new()
        .fill(color.gamma_multiply(0.2))
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(color).strong());
        });
}
