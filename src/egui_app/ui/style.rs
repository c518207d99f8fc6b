//! Palette and status styling shared across panels.

use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

/// Fixed color roles used by the renderer.
#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub user_bubble: Color32,
    pub ai_bubble: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(14, 15, 18),
        bg_secondary: Color32::from_rgb(24, 26, 31),
        bg_tertiary: Color32::from_rgb(36, 39, 46),
        panel_outline: Color32::from_rgb(48, 52, 61),
        text_primary: Color32::from_rgb(198, 203, 212),
        text_muted: Color32::from_rgb(136, 142, 153),
        accent: Color32::from_rgb(122, 170, 255),
        user_bubble: Color32::from_rgb(38, 58, 92),
        ai_bubble: Color32::from_rgb(40, 43, 50),
    }
}

/// Tone of the status badge in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Error,
}

pub fn status_badge_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Idle => "대기",
        StatusTone::Busy => "진행",
        StatusTone::Info => "안내",
        StatusTone::Error => "오류",
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(70, 74, 82),
        StatusTone::Busy => Color32::from_rgb(64, 134, 230),
        StatusTone::Info => Color32::from_rgb(84, 160, 122),
        StatusTone::Error => Color32::from_rgb(196, 72, 58),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_widget_style(&mut visuals.widgets.inactive, palette);
    set_widget_style(&mut visuals.widgets.hovered, palette);
    set_widget_style(&mut visuals.widgets.active, palette);
    set_widget_style(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(2);
    visuals.menu_corner_radius = CornerRadius::same(2);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_widget_style(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(2);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}
