//! Color palette for the week grid and its chrome.
//!
//! A single light theme; the values track the product's web styling
//! (Tailwind swatches), not egui defaults.

use egui::Color32;

use crate::models::event::{EventKind, EventStatus};

pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
pub const GRAY_50: Color32 = Color32::from_rgb(249, 250, 251);
pub const GRAY_100: Color32 = Color32::from_rgb(243, 244, 246);
pub const GRAY_200: Color32 = Color32::from_rgb(229, 231, 235);
pub const GRAY_300: Color32 = Color32::from_rgb(209, 213, 219);
pub const GRAY_400: Color32 = Color32::from_rgb(156, 163, 175);
pub const GRAY_500: Color32 = Color32::from_rgb(107, 114, 128);
pub const GRAY_700: Color32 = Color32::from_rgb(55, 65, 81);
pub const GRAY_800: Color32 = Color32::from_rgb(31, 41, 55);
pub const GRAY_900: Color32 = Color32::from_rgb(17, 24, 39);

pub const BLUE_600: Color32 = Color32::from_rgb(37, 99, 235);
pub const BLUE_SELECTED: Color32 = Color32::from_rgb(225, 239, 254);
pub const RED_500: Color32 = Color32::from_rgb(239, 68, 68);
pub const RED_600: Color32 = Color32::from_rgb(220, 38, 38);
pub const GREEN_500: Color32 = Color32::from_rgb(34, 197, 94);

/// Grid chrome colors.
#[derive(Clone, Copy)]
pub struct GridPalette {
    pub header_bg: Color32,
    pub header_text: Color32,
    pub today_accent: Color32,
    pub cell_bg: Color32,
    pub weekend_bg: Color32,
    pub gray_area_bg: Color32,
    pub cell_border: Color32,
    pub gray_area_border: Color32,
    pub time_label: Color32,
    pub time_line: Color32,
    pub tooltip_bg: Color32,
    pub tooltip_text: Color32,
    pub preview_valid: Color32,
    pub preview_invalid: Color32,
    pub preview_valid_border: Color32,
    pub preview_invalid_border: Color32,
}

impl Default for GridPalette {
    fn default() -> Self {
        Self {
            header_bg: WHITE,
            header_text: GRAY_700,
            today_accent: BLUE_600,
            cell_bg: WHITE,
            weekend_bg: GRAY_300,
            gray_area_bg: GRAY_300,
            cell_border: GRAY_300,
            gray_area_border: GRAY_400,
            time_label: GRAY_900,
            time_line: RED_500,
            tooltip_bg: GRAY_800,
            tooltip_text: WHITE,
            preview_valid: Color32::from_rgba_unmultiplied(167, 243, 208, 80),
            preview_invalid: Color32::from_rgba_unmultiplied(254, 226, 226, 80),
            preview_valid_border: Color32::from_rgb(110, 231, 183),
            preview_invalid_border: Color32::from_rgb(248, 113, 113),
        }
    }
}

/// Fill and border for an event card on the grid.
pub fn event_colors(kind: EventKind) -> (Color32, Color32) {
    match kind {
        EventKind::Meeting => (
            Color32::from_rgb(167, 243, 208),
            Color32::from_rgb(110, 231, 183),
        ),
        EventKind::Review | EventKind::Retro => (
            Color32::from_rgb(217, 249, 157),
            Color32::from_rgb(190, 242, 100),
        ),
        EventKind::Planning => (
            Color32::from_rgb(219, 234, 254),
            Color32::from_rgb(147, 197, 253),
        ),
        EventKind::Triage => (
            Color32::from_rgb(243, 232, 255),
            Color32::from_rgb(216, 180, 254),
        ),
        EventKind::Lunch => (
            Color32::from_rgb(254, 249, 195),
            Color32::from_rgb(253, 224, 71),
        ),
        EventKind::Workshop | EventKind::Talk => (
            Color32::from_rgb(191, 219, 254),
            Color32::from_rgb(147, 197, 253),
        ),
        EventKind::Session => (
            Color32::from_rgb(254, 215, 170),
            Color32::from_rgb(253, 186, 116),
        ),
        EventKind::Demo | EventKind::Other => (
            Color32::from_rgb(224, 231, 255),
            Color32::from_rgb(165, 180, 252),
        ),
    }
}

/// Saturated accent used in popups for the kind stripe and icon chip.
pub fn kind_accent(kind: EventKind) -> Color32 {
    match kind {
        EventKind::Meeting => Color32::from_rgb(16, 185, 129),
        EventKind::Review => Color32::from_rgb(132, 204, 22),
        EventKind::Planning | EventKind::Workshop => Color32::from_rgb(59, 130, 246),
        EventKind::Triage | EventKind::Session => Color32::from_rgb(249, 115, 22),
        EventKind::Lunch => Color32::from_rgb(234, 179, 8),
        EventKind::Demo => Color32::from_rgb(168, 85, 247),
        EventKind::Retro => Color32::from_rgb(99, 102, 241),
        EventKind::Talk => Color32::from_rgb(236, 72, 153),
        EventKind::Other => Color32::from_rgb(107, 114, 128),
    }
}

pub fn status_badge_color(status: EventStatus) -> Color32 {
    match status {
        EventStatus::Busy => RED_500,
        EventStatus::Available => GREEN_500,
    }
}

/// Apply the light application style once at startup.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = WHITE;
    visuals.window_fill = WHITE;
    visuals.extreme_bg_color = GRAY_50;
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, GRAY_200);
    visuals.override_text_color = Some(GRAY_900);
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_palette_distinguishes_cell_states() {
        let palette = GridPalette::default();
        assert_ne!(palette.weekend_bg, palette.cell_bg);
        assert_ne!(palette.gray_area_bg, palette.cell_bg);
        // The hover card is light text on a dark panel.
        assert_ne!(palette.tooltip_bg, palette.tooltip_text);
        assert_eq!(palette.tooltip_text, WHITE);
    }
}
