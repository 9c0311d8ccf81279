//! Dark icon rail on the far left edge of the window.

use egui::{Align2, Color32, FontId, RichText, Sense, Stroke};

use crate::ui_egui::app::CalendarApp;

const RAIL_BG: Color32 = Color32::from_rgb(17, 24, 39);
const ICON_COLOR: Color32 = Color32::from_rgb(156, 163, 175);
const ACTIVE_COLOR: Color32 = Color32::from_rgb(255, 255, 255);
const PROFILE_BG: Color32 = Color32::from_rgb(37, 99, 235);

/// Navigation targets above the divider. Only the calendar entry is wired;
/// the rest are stubs for sections this build does not ship.
const TOP_ICONS: [(&str, &str); 5] = [
    ("✨", "AI Scheduler"),
    ("🌐", "Global Data"),
    ("📊", "Analytics"),
    ("📍", "Tracking"),
    ("👥", "Members"),
];

const BOTTOM_ICONS: [(&str, &str); 3] = [
    ("📖", "Documentation"),
    ("🔗", "Integrations"),
    ("⚙", "Settings"),
];

const PROFILE_INITIALS: &str = "ZB";

pub fn show(ctx: &egui::Context, app: &mut CalendarApp) {
    egui::SidePanel::left("icon_rail")
        .exact_width(52.0)
        .resizable(false)
        .frame(
            egui::Frame::default()
                .fill(RAIL_BG)
                .inner_margin(egui::Margin::symmetric(8.0, 12.0)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("◩").size(20.0).color(ACTIVE_COLOR));
                ui.add_space(16.0);

                // The calendar icon toggles the side panel back open.
                if icon_button(ui, "📅", "Calendar", app.settings.show_side_panel).clicked() {
                    app.settings.show_side_panel = !app.settings.show_side_panel;
                }
                for (glyph, name) in TOP_ICONS {
                    let _ = icon_button(ui, glyph, name, false);
                }
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                profile_chip(ui);
                ui.add_space(8.0);
                for (glyph, name) in BOTTOM_ICONS.iter().rev() {
                    let _ = icon_button(ui, glyph, name, false);
                }
            });
        });
}

fn icon_button(ui: &mut egui::Ui, glyph: &str, name: &str, active: bool) -> egui::Response {
    let color = if active { ACTIVE_COLOR } else { ICON_COLOR };
    ui.add_space(4.0);
    ui.add(
        egui::Button::new(RichText::new(glyph).size(16.0).color(color))
            .fill(RAIL_BG)
            .stroke(Stroke::NONE)
            .min_size(egui::vec2(36.0, 36.0)),
    )
    .on_hover_text(name)
}

fn profile_chip(ui: &mut egui::Ui) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.circle_filled(rect.center(), 16.0, PROFILE_BG);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        PROFILE_INITIALS,
        FontId::proportional(12.0),
        ACTIVE_COLOR,
    );
    let _ = response.on_hover_text("Profile");
}
