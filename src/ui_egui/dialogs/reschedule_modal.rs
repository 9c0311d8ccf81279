//! "Reschedule Call" modal: round robin vs manual closer selection.

use egui::{RichText, Stroke};

use crate::models::event::EventId;
use crate::ui_egui::app::CalendarApp;
use crate::ui_egui::theme;

const CLOSERS: [&str; 3] = ["Closer 1", "Closer 2", "Closer 3"];

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RescheduleOption {
    RoundRobin,
    Manual,
}

pub struct RescheduleModalState {
    pub event_id: EventId,
    pub option: RescheduleOption,
    pub closer: Option<&'static str>,
}

impl RescheduleModalState {
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            option: RescheduleOption::Manual,
            closer: None,
        }
    }
}

pub fn show(ctx: &egui::Context, app: &mut CalendarApp) {
    let Some(mut state) = app.reschedule_modal.take() else {
        return;
    };
    let Some(event) = app.event(state.event_id).cloned() else {
        return;
    };

    let mut open = true;
    let mut confirmed = false;
    let mut dismissed = false;

    egui::Window::new(RichText::new("Reschedule Call").size(15.0).strong())
        .id(egui::Id::new("reschedule_modal"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_min_width(300.0);

            ui.radio_value(
                &mut state.option,
                RescheduleOption::RoundRobin,
                RichText::new("Round Robin").size(13.0).strong(),
            );
            ui.label(
                RichText::new(
                    "The call will automatically be scheduled to the best available closer",
                )
                .size(11.0)
                .color(theme::GRAY_500),
            );
            ui.add_space(6.0);

            ui.radio_value(
                &mut state.option,
                RescheduleOption::Manual,
                RichText::new("Select Manually").size(13.0).strong(),
            );
            ui.label(
                RichText::new(
                    "You can add a call in the past as well by selecting the closer manually",
                )
                .size(11.0)
                .color(theme::GRAY_500),
            );

            if state.option == RescheduleOption::Manual {
                ui.add_space(4.0);
                egui::ComboBox::from_id_source("closer_select")
                    .selected_text(state.closer.unwrap_or("Select closer"))
                    .width(200.0)
                    .show_ui(ui, |ui| {
                        for closer in CLOSERS {
                            ui.selectable_value(&mut state.closer, Some(closer), closer);
                        }
                    });
            }
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
                                RichText::new("Schedule Call").size(12.0).color(theme::WHITE),
                            )
                            .fill(theme::BLUE_600),
                        )
                        .clicked()
                    {
                        confirmed = true;
                    }
                });
            });
        });

    if confirmed {
        match (state.option, state.closer) {
            (RescheduleOption::RoundRobin, _) => {
                log::info!("rescheduling '{}' via round robin", event.title)
            }
            (RescheduleOption::Manual, Some(closer)) => {
                log::info!("rescheduling '{}' with {}", event.title, closer)
            }
            (RescheduleOption::Manual, None) => {
                log::info!("rescheduling '{}' manually", event.title)
            }
        }
        app.close_popups();
    } else if open && !dismissed {
        app.reschedule_modal = Some(state);
    }
}
