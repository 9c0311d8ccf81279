//! Confirmation shown when an event is dropped onto the 1-2 PM break hour.

use egui::{RichText, Stroke};

use crate::services::grid::drag::DragOutcome;
use crate::ui_egui::app::CalendarApp;
use crate::ui_egui::theme;

pub fn show(ctx: &egui::Context, app: &mut CalendarApp) {
    let Some(pending) = app.drag.pending_break() else {
        return;
    };
    let title = app
        .event(pending.event_id)
        .map(|event| event.title.clone())
        .unwrap_or_default();

    let mut confirmed = false;
    let mut dismissed = false;

    egui::Window::new(RichText::new("Schedule over break?").size(14.0).strong())
        .id(egui::Id::new("break_confirm_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_min_width(280.0);
            ui.label(
                RichText::new(format!(
                    "This moves \"{}\" into the 1 PM - 2 PM break. Schedule it anyway?",
                    title
                ))
                .size(12.0)
                .color(theme::GRAY_700),
            );
            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(
                        egui::Button::new(
                            RichText::new("Schedule anyway").size(12.0).color(theme::WHITE),
                        )
                        .fill(theme::BLUE_600),
                    )
                    .clicked()
                {
                    confirmed = true;
                }
                if ui
                    .add(
                        egui::Button::new(RichText::new("Keep it free").size(12.0))
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
        if let DragOutcome::Moved { event_id, position } = app.drag.confirm_break() {
            app.apply_move(event_id, position);
        }
    } else if dismissed {
        let _ = app.drag.dismiss_break();
    }
}
