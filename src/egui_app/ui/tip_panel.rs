use super::card_frame;
use super::style;
use crate::analysis::ImmunityTip;
use crate::egui_app::quick_tips::IMMUNITY_FOOTER;
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText};

pub(super) fn render(ui: &mut egui::Ui, tip: &ImmunityTip) {
    let palette = style::palette();
    card_frame()
        .stroke(egui::Stroke::new(1.0, palette.verified.gamma_multiply(0.6)))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Digital Immunity Tip")
                        .size(17.0)
                        .strong()
                        .color(palette.verified),
                );
                ui.label(RichText::new("Learn & Protect").small().color(palette.text_muted));
            });
            ui.add_space(8.0);
            ui.label(RichText::new(&tip.title).strong());
            ui.label(&tip.description);
            ui.add_space(8.0);
            Frame::new()
                .fill(palette.bg_secondary)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(Margin::same(10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new("Pattern to Remember")
                            .small()
                            .strong()
                            .color(palette.accent),
                    );
                    ui.label(RichText::new(&tip.pattern).italics());
                });
            ui.add_space(8.0);
            ui.label(RichText::new(IMMUNITY_FOOTER).small().color(palette.text_muted));
        });
}
