//! Delete confirmation for synced events.

use egui::{RichText, Stroke};

use crate::ui_egui::app::CalendarApp;
use crate::ui_egui::theme;

pub fn show(ctx: &egui::Context, app: &mut CalendarApp) {
    let Some(id) = app.delete_dialog else {
        return;
    };
    let Some(event) = app.event(id).cloned() else {
        app.delete_dialog = None;
        return;
    };

    let mut open = true;
    let mut confirmed = false;
    let mut dismissed = false;

    egui::Window::new(
        RichText::new(format!("Delete {}?", event.title))
            .size(14.0)
            .strong(),
    )
    .id(egui::Id::new("delete_confirmation_dialog"))
    .collapsible(false)
    .resizable(false)
    .open(&mut open)
    .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
    .show(ctx, |ui| {
        ui.set_min_width(320.0);
        ui.label(
            RichText::new(
                "This will permanently remove the event from both iClosed and your \
                 Google Calendar. This action cannot be undone.",
            )
            .size(12.0)
            .color(theme::GRAY_700),
        );
        ui.separator();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(
                    egui::Button::new(
                        RichText::new("Yes, cancel event").size(12.0).color(theme::WHITE),
                    )
                    .fill(theme::RED_600),
                )
                .clicked()
            {
                confirmed = true;
            }
            if ui
                .add(
                    egui::Button::new(RichText::new("No, go back").size(12.0))
                        .fill(theme::WHITE)
                        .stroke(Stroke::new(1.0, theme::GRAY_300)),
                )
                .clicked()
            {
                dismissed = true;
            }
        });
    });

    if confirmed {
        log::info!("deleted event '{}'", event.title);
        app.delete_event(id);
    } else if !open || dismissed {
        app.delete_dialog = None;
    }
}
