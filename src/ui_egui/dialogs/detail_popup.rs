//! Event detail popup: a Google-style card for synced events, a leaner
//! invitee card for iClosed bookings.

use chrono::{Datelike, Local};
use egui::{RichText, Stroke, Ui};

use crate::models::event::{Event, EventKind, EventSource};
use crate::ui_egui::app::CalendarApp;
use crate::ui_egui::dialogs::{CancelModalState, RescheduleModalState};
use crate::ui_egui::theme::{self, kind_accent, status_badge_color};
use crate::utils::date::DAY_NAMES_FULL;

pub fn show(ctx: &egui::Context, app: &mut CalendarApp) {
    let Some(id) = app.detail_popup else {
        return;
    };
    let Some(event) = app.event(id).cloned() else {
        app.detail_popup = None;
        return;
    };

    let mut open = true;
    let mut action = None;

    egui::Window::new(RichText::new(event.title.clone()).size(14.0).strong())
        .id(egui::Id::new("event_detail_popup"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, -40.0))
        .show(ctx, |ui| {
            ui.set_min_width(300.0);
            match event.source {
                EventSource::Iclosed => iclosed_body(ui, &event, &mut action),
                EventSource::Google => google_body(ui, &event, &mut action),
            }
        });

    if !open {
        app.detail_popup = None;
    }
    match action {
        Some(Action::ToggleStatus) => app.toggle_event_status(id),
        Some(Action::Delete) => app.delete_dialog = Some(id),
        Some(Action::Cancel) => {
            app.cancel_modal = Some(CancelModalState::new(id));
        }
        Some(Action::Reschedule) => {
            app.reschedule_modal = Some(RescheduleModalState::new(id));
        }
        None => {}
    }
}

enum Action {
    ToggleStatus,
    Delete,
    Cancel,
    Reschedule,
}

fn when_line(event: &Event) -> String {
    let now = Local::now().date_naive();
    format!(
        "{} {} {} • {}",
        DAY_NAMES_FULL[event.day as usize % 7],
        now.format("%B"),
        now.day(),
        event.time_label
    )
}

fn google_body(ui: &mut Ui, event: &Event, action: &mut Option<Action>) {
    ui.horizontal(|ui| {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 4.0, kind_accent(event.kind));
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "📅",
            egui::FontId::proportional(14.0),
            theme::WHITE,
        );
        ui.label(RichText::new(&event.title).size(13.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let badge = status_badge_color(event.status);
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(64.0, 20.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 10.0, badge);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                event.status.label(),
                egui::FontId::proportional(11.0),
                theme::WHITE,
            );
        });
    });
    ui.add_space(6.0);
    ui.label(
        RichText::new("Random event for this week")
            .size(12.0)
            .color(theme::GRAY_500),
    );
    ui.label(RichText::new(when_line(event)).size(12.0).color(theme::GRAY_700));
    ui.separator();

    ui.horizontal(|ui| {
        let toggle_text = if event.is_busy() {
            "⊘ Mark available"
        } else {
            "⊘ Mark busy"
        };
        if framed_button(ui, toggle_text).clicked() {
            *action = Some(Action::ToggleStatus);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if framed_button(ui, "🗑").clicked() {
                *action = Some(Action::Delete);
            }
        });
    });
}

fn iclosed_body(ui: &mut Ui, event: &Event, action: &mut Option<Action>) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(6.0, 48.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 2.0, kind_accent(event.kind));
        ui.vertical(|ui| {
            ui.label(RichText::new(&event.title).size(15.0).strong());
            ui.label(RichText::new(when_line(event)).size(12.0).color(theme::GRAY_500));
        });
    });
    ui.separator();

    let invitee_count = if event.kind == EventKind::Workshop { 5 } else { 2 };
    ui.label(
        RichText::new(format!("Invitee {}", invitee_count))
            .size(12.0)
            .strong()
            .underline(),
    );
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("invitee{}@example.com", invitee_count))
                .size(12.0)
                .color(theme::GRAY_700),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let _ = framed_button(ui, "Invitee");
        });
    });
    ui.separator();

    ui.horizontal(|ui| {
        if framed_button(ui, "🗑 Cancel").clicked() {
            *action = Some(Action::Cancel);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if framed_button(ui, "⟳ Reschedule").clicked() {
                *action = Some(Action::Reschedule);
            }
        });
    });
}

fn framed_button(ui: &mut Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).size(12.0).color(theme::GRAY_700))
            .fill(theme::WHITE)
            .stroke(Stroke::new(1.0, theme::GRAY_300)),
    )
}
