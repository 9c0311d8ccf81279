//! "Calendar view" side panel: schedule/member pickers, event filter,
//! connected calendars, and the availability hover card.

use egui::{Color32, RichText, ScrollArea, Stroke, Ui};

use crate::ui_egui::app::CalendarApp;
use crate::ui_egui::theme;

const MEMBERS: [&str; 6] = [
    "Member 1", "Member 2", "Member 3", "Member 4", "Member 5", "Member 6",
];
const FILTERS: [&str; 3] = ["Events", "Meetings", "Tasks"];
const CONNECTED_CALENDARS: [&str; 3] = [
    "zack.bing@gmail.com",
    "jane.doe@gmail.com",
    "system@iclosed.io",
];
const EVENT_OPTIONS: [(&str, &str); 7] = [
    ("All events", ""),
    ("Team Standup", "Random event 1 for this month"),
    ("Architecture Review", "Random event 2 for this month"),
    ("Product Planning", "Random event 3 for this month"),
    ("Bug Triage", "Random event 4 for this month"),
    ("User Research Call", "Random event 5 for this month"),
    ("Technical Discussion", "Random event 6 for this month"),
];

pub struct SidePanelState {
    pub schedule_for: String,
    pub schedule_open: bool,
    pub member_search: String,
    pub filter: String,
    pub filter_open: bool,
    pub selected_events: Vec<String>,
    pub events_open: bool,
    pub event_search: String,
    pub connected: [bool; 3],
}

impl Default for SidePanelState {
    fn default() -> Self {
        Self {
            schedule_for: "My Schedule".to_string(),
            schedule_open: false,
            member_search: String::new(),
            filter: "Events".to_string(),
            filter_open: false,
            selected_events: vec!["All events".to_string()],
            events_open: false,
            event_search: String::new(),
            connected: [true, true, false],
        }
    }
}

impl SidePanelState {
    /// A specific event (not "All events") drives the extra detail block.
    fn specific_event_selected(&self) -> bool {
        self.selected_events.iter().any(|name| name != "All events")
    }

    fn events_summary(&self) -> String {
        if self.selected_events.iter().any(|name| name == "All events") {
            return "All events".to_string();
        }
        match self.selected_events.len() {
            0 => "All events".to_string(),
            1 => self.selected_events[0].clone(),
            n => format!("{} events selected", n),
        }
    }

    fn toggle_event(&mut self, name: &str) {
        if name == "All events" {
            self.selected_events = vec!["All events".to_string()];
            return;
        }
        self.selected_events.retain(|sel| sel != "All events");
        if let Some(idx) = self.selected_events.iter().position(|sel| sel == name) {
            self.selected_events.remove(idx);
        } else {
            self.selected_events.push(name.to_string());
        }
        if self.selected_events.is_empty() {
            self.selected_events.push("All events".to_string());
        }
    }
}

pub fn show(ctx: &egui::Context, app: &mut CalendarApp) {
    egui::SidePanel::left("calendar_side_panel")
        .exact_width(260.0)
        .resizable(false)
        .frame(
            egui::Frame::default()
                .fill(theme::WHITE)
                .inner_margin(egui::Margin::symmetric(12.0, 12.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Button::new(RichText::new("◀").color(theme::GRAY_500))
                            .fill(theme::WHITE)
                            .stroke(Stroke::NONE),
                    )
                    .clicked()
                {
                    app.settings.show_side_panel = false;
                }
                ui.label(RichText::new("Calendar view").size(16.0).strong());
            });
            ui.separator();

            ScrollArea::vertical().show(ui, |ui| {
                let state = &mut app.side_panel;

                section_label(ui, "View Schedule for");
                schedule_dropdown(ui, state);
                ui.add_space(8.0);

                section_label(ui, "Filter by");
                filter_dropdown(ui, state);
                ui.add_space(8.0);

                section_label(ui, "Events");
                events_dropdown(ui, state);

                if state.specific_event_selected() {
                    ui.add_space(12.0);
                    detail_line(ui, "EVENT DURATION", "60 minutes");
                    availability_schedule_line(ui);
                    detail_line(ui, "SLOTS AVAILABLE FOR WEEK", "26");
                    detail_line(ui, "WEEKLY OCCUPANCY", "24%");
                }

                ui.add_space(12.0);
                ui.label(RichText::new("Connected calendar(s)").size(13.0).strong());
                ui.label(
                    RichText::new(
                        "Checking for scheduling conflicts. Enable or disable event visibility.",
                    )
                    .size(11.0)
                    .color(theme::GRAY_500),
                );
                ui.add_space(4.0);
                for (idx, email) in CONNECTED_CALENDARS.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.checkbox(&mut state.connected[idx], "");
                        ui.label(RichText::new("📅").size(12.0));
                        ui.label(RichText::new(*email).size(13.0));
                    });
                }
            });
        });
}

fn section_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(13.0).strong().color(theme::GRAY_900));
    ui.add_space(2.0);
}

fn detail_line(ui: &mut Ui, heading: &str, value: &str) {
    ui.label(RichText::new(heading).size(10.0).strong().color(theme::GRAY_500));
    ui.label(RichText::new(value).size(13.0));
    ui.add_space(6.0);
}

fn dropdown_button(ui: &mut Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(format!("{}  ⏷", text)).size(13.0))
            .fill(theme::WHITE)
            .stroke(Stroke::new(1.0, theme::GRAY_300))
            .min_size(egui::vec2(230.0, 32.0)),
    )
}

fn schedule_dropdown(ui: &mut Ui, state: &mut SidePanelState) {
    if dropdown_button(ui, &state.schedule_for).clicked() {
        state.schedule_open = !state.schedule_open;
    }
    if !state.schedule_open {
        return;
    }
    egui::Frame::default()
        .fill(theme::WHITE)
        .stroke(Stroke::new(1.0, theme::GRAY_200))
        .inner_margin(egui::Margin::same(6.0))
        .show(ui, |ui| {
            ui.label(RichText::new("My Schedule").size(13.0).strong());
            ui.label(RichText::new("Filter by member").size(12.0).color(theme::GRAY_500));
            ui.add(
                egui::TextEdit::singleline(&mut state.member_search)
                    .hint_text("Search by member name")
                    .desired_width(210.0),
            );
            let needle = state.member_search.to_lowercase();
            let mut picked = None;
            for member in MEMBERS {
                if !needle.is_empty() && !member.to_lowercase().contains(&needle) {
                    continue;
                }
                if ui
                    .add(egui::Button::new(RichText::new(member).size(13.0)).frame(false))
                    .clicked()
                {
                    picked = Some(member);
                }
            }
            if let Some(member) = picked {
                state.schedule_for = member.to_string();
                state.schedule_open = false;
                state.member_search.clear();
            }
        });
}

fn filter_dropdown(ui: &mut Ui, state: &mut SidePanelState) {
    if dropdown_button(ui, &state.filter).clicked() {
        state.filter_open = !state.filter_open;
    }
    if !state.filter_open {
        return;
    }
    egui::Frame::default()
        .fill(theme::WHITE)
        .stroke(Stroke::new(1.0, theme::GRAY_200))
        .inner_margin(egui::Margin::same(6.0))
        .show(ui, |ui| {
            for option in FILTERS {
                if ui
                    .add(egui::Button::new(RichText::new(option).size(13.0)).frame(false))
                    .clicked()
                {
                    state.filter = option.to_string();
                    state.filter_open = false;
                }
            }
        });
}

fn events_dropdown(ui: &mut Ui, state: &mut SidePanelState) {
    if dropdown_button(ui, &state.events_summary()).clicked() {
        state.events_open = !state.events_open;
    }
    if !state.events_open {
        return;
    }
    egui::Frame::default()
        .fill(theme::WHITE)
        .stroke(Stroke::new(1.0, theme::GRAY_200))
        .inner_margin(egui::Margin::same(6.0))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.event_search)
                    .hint_text("Search by event name")
                    .desired_width(210.0),
            );
            let needle = state.event_search.to_lowercase();
            let mut toggled = None;
            for (name, description) in EVENT_OPTIONS {
                if !needle.is_empty() && !name.to_lowercase().contains(&needle) {
                    continue;
                }
                let checked = state.selected_events.iter().any(|sel| sel == name);
                let mut flag = checked;
                ui.horizontal(|ui| {
                    if ui.checkbox(&mut flag, RichText::new(name).size(13.0)).changed() {
                        toggled = Some(name);
                    }
                });
                if !description.is_empty() {
                    ui.label(RichText::new(description).size(11.0).color(theme::GRAY_500));
                }
            }
            if let Some(name) = toggled {
                state.toggle_event(name);
            }
        });
}

/// "AVAILABILITY SCHEDULE" heading with an info glyph that pops the weekly
/// availability card on hover.
fn availability_schedule_line(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("AVAILABILITY SCHEDULE")
                .size(10.0)
                .strong()
                .color(theme::GRAY_500),
        );
        ui.label(RichText::new("ⓘ").size(11.0).color(theme::GRAY_400))
            .on_hover_ui(|ui| {
                ui.set_min_width(180.0);
                let frame_bg = Color32::from_rgb(17, 24, 39);
                egui::Frame::default().fill(frame_bg).inner_margin(8.0).show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Default availability")
                                .size(13.0)
                                .color(theme::WHITE),
                        );
                    });
                    for (day, hours) in [
                        ("Mon", "9 AM - 5 PM"),
                        ("Tue", "9 AM - 5 PM"),
                        ("Wed", "9 AM - 5 PM"),
                        ("Thu", "9 AM - 5 PM"),
                        ("Fri", "9 AM - 5 PM"),
                        ("Sat", "-"),
                        ("Sun", "-"),
                    ] {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(day).size(11.0).color(theme::GRAY_400));
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(RichText::new(hours).size(11.0).color(theme::WHITE));
                                },
                            );
                        });
                    }
                });
            });
    });
    ui.label(RichText::new("Default availability").size(13.0));
    ui.add_space(6.0);
}
