use super::card_frame;
use super::style;
use crate::egui_app::quick_tips::{QUICK_TIPS_HEADING, TipAccent, quick_tips};
use eframe::egui::{self, RichText};

pub(super) fn render(ui: &mut egui::Ui) {
    let palette = style::palette();
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(QUICK_TIPS_HEADING).size(17.0).strong());
        ui.add_space(8.0);
        ui.columns(quick_tips().len(), |columns| {
            for (column, tip) in columns.iter_mut().zip(quick_tips()) {
                let color = accent_color(tip.accent);
                column.label(RichText::new(tip.title).strong().color(color));
                column.label(RichText::new(tip.body).color(palette.text_muted));
            }
        });
    });
}

fn accent_color(accent: TipAccent) -> egui::Color32 {
    let palette = style::palette();
    match accent {
        TipAccent::Verified => palette.verified,
        TipAccent::Warning => palette.warning,
        TipAccent::Trust => palette.accent,
    }
}
