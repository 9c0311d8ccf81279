//! "Cancel this event?" modal with an optional reason, for iClosed
//! bookings.

use egui::{Color32, RichText, Stroke};

use crate::models::event::EventId;
use crate::ui_egui::app::CalendarApp;
use crate::ui_egui::theme::{self, kind_accent};

const ICLOSED_BLUE: Color32 = Color32::from_rgb(0, 45, 164);

pub struct CancelModalState {
    pub event_id: EventId,
    pub reason: String,
}

impl CancelModalState {
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            reason: String::new(),
        }
    }
}

pub fn show(ctx: &egui::Context, app: &mut CalendarApp) {
    let Some(mut state) = app.cancel_modal.take() else {
        return;
    };
    let Some(event) = app.event(state.event_id).cloned() else {
        return;
    };

    let mut open = true;
    let mut confirmed = false;
    let mut dismissed = false;

    egui::Window::new(RichText::new("Cancel this event?").size(15.0).strong())
        .id(egui::Id::new("cancel_event_modal"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            egui::Frame::default()
                .fill(theme::GRAY_50)
                .inner_margin(8.0)
                .rounding(6.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let (bar, _) =
                            ui.allocate_exact_size(egui::vec2(4.0, 40.0), egui::Sense::hover());
                        ui.painter().rect_filled(bar, 2.0, kind_accent(event.kind));
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&event.title).size(13.0).strong());
                            ui.label(
                                RichText::new(&event.time_label)
                                    .size(11.0)
                                    .color(theme::GRAY_500),
                            );
                        });
                    });
                    ui.add_space(6.0);
                    participant(ui, "Z", "Zack Bing", "zack.bing@iclosed.io", "Host");
                    participant(ui, "J", "Jerry Sienfeld", "jerry@gmail.com", "Invitee");
                });

            ui.add_space(8.0);
            ui.label(
                RichText::new("Reason for canceling? (Optional)")
                    .size(12.0)
                    .strong(),
            );
            ui.add(
                egui::TextEdit::multiline(&mut state.reason)
                    .hint_text("Enter reason for cancelling")
                    .desired_rows(2)
                    .desired_width(250.0),
            );
            ui.label(
                RichText::new("Cancellation email will be sent to the invitee.")
                    .size(10.0)
                    .color(theme::GRAY_500),
            );
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Button::new(RichText::new("Cancel").size(12.0))
                            .fill(theme::WHITE)
                            .stroke(Stroke::new(1.0, theme::GRAY_300)),
                    )
                    .clicked()
                {
                    dismissed = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(
                            egui::Button::new(
                                RichText::new("Cancel event").size(12.0).color(theme::WHITE),
                            )
                            .fill(ICLOSED_BLUE),
                        )
                        .clicked()
                    {
                        confirmed = true;
                    }
                });
            });
        });

    if confirmed {
        if state.reason.trim().is_empty() {
            log::info!("event '{}' cancelled", event.title);
        } else {
            log::info!("event '{}' cancelled: {}", event.title, state.reason.trim());
        }
        app.delete_event(state.event_id);
    } else if open && !dismissed {
        app.cancel_modal = Some(state);
    }
}

fn participant(ui: &mut egui::Ui, initial: &str, name: &str, email: &str, role: &str) {
    ui.horizontal(|ui| {
        let (avatar, _) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
        ui.painter().circle_filled(avatar.center(), 12.0, ICLOSED_BLUE);
        ui.painter().text(
            avatar.center(),
            egui::Align2::CENTER_CENTER,
            initial,
            egui::FontId::proportional(11.0),
            theme::WHITE,
        );
        ui.vertical(|ui| {
            ui.label(RichText::new(name).size(12.0).strong());
            ui.label(RichText::new(email).size(10.0).color(theme::GRAY_500));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(role).size(10.0).color(theme::GRAY_500));
        });
    });
}
