//! Application state and the eframe update loop.

use chrono::{Local, NaiveDate};
use eframe::CreationContext;

use crate::models::event::{Event, EventId};
use crate::models::settings::Settings;
use crate::services::grid::drag::{DragController, SlotPosition};
use crate::services::grid::week_days;
use crate::services::mock;
use crate::services::settings::SettingsService;
use crate::ui_egui::dialogs::{CancelModalState, RescheduleModalState};
use crate::ui_egui::timezone_picker::TimezonePickerState;
use crate::ui_egui::{dialogs, icon_rail, side_panel, theme, top_bar, views};
use crate::utils::date::week_start;

pub struct CalendarApp {
    pub settings: Settings,
    settings_service: SettingsService,

    /// Any date inside the displayed week.
    pub current_date: NaiveDate,
    /// Month shown in the date-picker dropdown.
    pub calendar_month: NaiveDate,
    pub events: Vec<Event>,
    /// Week start and zone the current event list was generated for.
    loaded_key: Option<(NaiveDate, String)>,

    pub drag: DragController,

    pub show_date_picker: bool,
    pub tz_picker: TimezonePickerState,
    pub side_panel: side_panel::SidePanelState,

    pub detail_popup: Option<EventId>,
    pub cancel_modal: Option<CancelModalState>,
    pub reschedule_modal: Option<RescheduleModalState>,
    pub delete_dialog: Option<EventId>,
}

impl CalendarApp {
    pub fn new(cc: &CreationContext<'_>, settings: Settings) -> Self {
        theme::apply(&cc.egui_ctx);
        let today = Local::now().date_naive();
        Self {
            settings,
            settings_service: SettingsService::new(),
            current_date: today,
            calendar_month: today,
            events: Vec::new(),
            loaded_key: None,
            drag: DragController::new(),
            show_date_picker: false,
            tz_picker: TimezonePickerState::default(),
            side_panel: side_panel::SidePanelState::default(),
            detail_popup: None,
            cancel_modal: None,
            reschedule_modal: None,
            delete_dialog: None,
        }
    }

    /// Regenerate the event list when the displayed week or zone changes.
    fn ensure_week_events(&mut self) {
        let key = (week_start(self.current_date), self.settings.timezone.clone());
        if self.loaded_key.as_ref() != Some(&key) {
            self.events = mock::events_for_week(self.current_date, &self.settings.timezone);
            self.loaded_key = Some(key);
            self.drag.cancel();
            self.close_popups();
        }
    }

    pub fn week_dates(&self) -> [NaiveDate; 7] {
        week_days(self.current_date)
    }

    pub fn go_to_previous_week(&mut self) {
        self.current_date -= chrono::Duration::days(7);
        self.calendar_month = self.current_date;
    }

    pub fn go_to_next_week(&mut self) {
        self.current_date += chrono::Duration::days(7);
        self.calendar_month = self.current_date;
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.current_date = date;
        self.show_date_picker = false;
    }

    pub fn set_timezone(&mut self, zone_id: &str) {
        if self.settings.timezone != zone_id {
            log::info!("timezone changed to {}", zone_id);
            self.settings.timezone = zone_id.to_string();
        }
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn apply_move(&mut self, id: EventId, position: SlotPosition) {
        if let Some(event) = self.events.iter_mut().find(|event| event.id == id) {
            event.move_to(position.day, position.hour, position.minutes);
            log::debug!(
                "moved '{}' to day {} {}:{:02}",
                event.title,
                position.day,
                position.hour,
                position.minutes
            );
        }
    }

    pub fn delete_event(&mut self, id: EventId) {
        self.events.retain(|event| event.id != id);
        self.close_popups();
    }

    pub fn toggle_event_status(&mut self, id: EventId) {
        if let Some(event) = self.events.iter_mut().find(|event| event.id == id) {
            event.status = event.status.toggled();
        }
    }

    pub fn close_popups(&mut self) {
        self.detail_popup = None;
        self.cancel_modal = None;
        self.reschedule_modal = None;
        self.delete_dialog = None;
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_week_events();

        icon_rail::show(ctx, self);
        if self.settings.show_side_panel {
            side_panel::show(ctx, self);
        }
        top_bar::show(ctx, self);

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(theme::WHITE))
            .show(ctx, |ui| {
                views::week_view::show(ui, self);
            });

        dialogs::show(ctx, self);

        // Keep the live clocks and the current-time line moving.
        ctx.request_repaint_after(std::time::Duration::from_secs(30));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(err) = self.settings_service.save(&self.settings) {
            log::warn!("failed to save settings: {:#}", err);
        }
    }
}
