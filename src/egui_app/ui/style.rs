use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::analysis::{CredibilityStatus, ScoreBand};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_card: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub trust: Color32,
    pub verified: Color32,
    pub warning: Color32,
    pub destructive: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(11, 14, 20),
        bg_secondary: Color32::from_rgb(19, 24, 33),
        bg_card: Color32::from_rgb(27, 33, 45),
        panel_outline: Color32::from_rgb(44, 52, 68),
        text_primary: Color32::from_rgb(222, 228, 238),
        text_muted: Color32::from_rgb(140, 150, 166),
        accent: Color32::from_rgb(99, 140, 255),
        trust: Color32::from_rgb(52, 84, 170),
        verified: Color32::from_rgb(46, 170, 110),
        warning: Color32::from_rgb(226, 160, 40),
        destructive: Color32::from_rgb(220, 68, 68),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_card;
    visuals.error_fg_color = palette.destructive;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.trust;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_card;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    soften(&mut visuals.widgets.inactive, palette);
    soften(&mut visuals.widgets.hovered, palette);
    soften(&mut visuals.widgets.active, palette);
    soften(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.menu_corner_radius = CornerRadius::same(6);
    visuals.popup_shadow = Shadow::NONE;
}

fn soften(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_card;
    vis.weak_bg_fill = palette.bg_card;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn card_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

/// Severity of the message shown in the status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

pub fn status_badge(tone: StatusTone) -> (&'static str, Color32) {
    let palette = palette();
    match tone {
        StatusTone::Idle => ("Idle", Color32::from_rgb(52, 56, 64)),
        StatusTone::Busy => ("Analyzing", palette.accent),
        StatusTone::Info => ("Info", palette.verified),
        StatusTone::Warning => ("Warning", palette.warning),
        StatusTone::Error => ("Error", palette.destructive),
    }
}

/// Colour for a credibility score: green, amber or red.
pub fn band_color(band: ScoreBand) -> Color32 {
    let palette = palette();
    match band {
        ScoreBand::High => palette.verified,
        ScoreBand::Medium => palette.warning,
        ScoreBand::Low => palette.destructive,
    }
}

pub fn status_color(status: CredibilityStatus) -> Color32 {
    let palette = palette();
    match status {
        CredibilityStatus::Verified => palette.verified,
        CredibilityStatus::Suspicious => palette.warning,
        CredibilityStatus::Misleading => palette.destructive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_colours_follow_traffic_light() {
        let palette = palette();
        assert_eq!(band_color(ScoreBand::from_score(85)), palette.verified);
        assert_eq!(band_color(ScoreBand::from_score(55)), palette.warning);
        assert_eq!(band_color(ScoreBand::from_score(35)), palette.destructive);
    }

    #[test]
    fn busy_badge_reads_analyzing() {
        assert_eq!(status_badge(StatusTone::Busy).0, "Analyzing");
    }
}
