//! Top navigation bar: month title, week arrows, date-range picker, and the
//! timezone selector.

use chrono::{Datelike, NaiveDate};
use egui::{Align2, Area, Frame, Order, RichText, Stroke};

use crate::ui_egui::app::CalendarApp;
use crate::ui_egui::{theme, timezone_picker};
use crate::utils::date::{
    add_days, days_in_month, format_month_year, format_short_date, is_today, same_month,
    week_start,
};

pub fn show(ctx: &egui::Context, app: &mut CalendarApp) {
    egui::TopBottomPanel::top("top_bar")
        .frame(
            egui::Frame::default()
                .fill(theme::WHITE)
                .inner_margin(egui::Margin::symmetric(12.0, 8.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format_month_year(app.current_date))
                        .size(18.0)
                        .strong()
                        .color(theme::GRAY_900),
                );

                if nav_button(ui, "◀").clicked() {
                    app.go_to_previous_week();
                }

                let start = week_start(app.current_date);
                let end = add_days(start, 6);
                let range = format!(
                    "{} to {}, {}",
                    format_short_date(start),
                    format_short_date(end),
                    end.year()
                );
                let range_button = ui.add(
                    egui::Button::new(RichText::new(range).size(13.0).strong())
                        .fill(theme::WHITE)
                        .stroke(Stroke::new(1.0, theme::GRAY_300))
                        .min_size(egui::vec2(200.0, 32.0)),
                );
                if range_button.clicked() {
                    app.show_date_picker = !app.show_date_picker;
                    app.calendar_month = app.current_date;
                }
                if app.show_date_picker {
                    date_picker(ui, app, range_button.rect.left_bottom());
                }

                if nav_button(ui, "▶").clicked() {
                    app.go_to_next_week();
                }

                let current_zone = app.settings.timezone.clone();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(zone) = timezone_picker::show(ui, &mut app.tz_picker, &current_zone)
                    {
                        app.set_timezone(&zone);
                    }
                });
            });
        });
}

fn nav_button(ui: &mut egui::Ui, glyph: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(glyph).size(12.0).color(theme::GRAY_500))
            .fill(theme::WHITE)
            .stroke(Stroke::new(1.0, theme::GRAY_300))
            .min_size(egui::vec2(32.0, 32.0)),
    )
}

/// Mini month calendar anchored below the range button. A day click jumps
/// to that day's week.
fn date_picker(ui: &mut egui::Ui, app: &mut CalendarApp, anchor: egui::Pos2) {
    let area = Area::new(ui.id().with("date_picker"))
        .order(Order::Foreground)
        .fixed_pos(anchor + egui::vec2(0.0, 4.0))
        .pivot(Align2::LEFT_TOP);

    area.show(ui.ctx(), |ui| {
        Frame::popup(ui.style())
            .fill(theme::WHITE)
            .stroke(Stroke::new(1.0, theme::GRAY_300))
            .show(ui, |ui| {
                ui.set_min_width(280.0);

                ui.horizontal(|ui| {
                    if nav_button(ui, "◀").clicked() {
                        app.calendar_month = previous_month(app.calendar_month);
                    }
                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.label(
                                RichText::new(format_month_year(app.calendar_month))
                                    .size(13.0)
                                    .strong(),
                            );
                        },
                    );
                });
                // egui lays children left to right; draw the next-month
                // arrow over the right edge of the header strip.
                let header = ui.min_rect();
                let next_rect = egui::Rect::from_min_size(
                    egui::pos2(header.right() - 32.0, header.top()),
                    egui::vec2(32.0, 32.0),
                );
                if ui
                    .put(
                        next_rect,
                        egui::Button::new(RichText::new("▶").size(12.0).color(theme::GRAY_500))
                            .fill(theme::WHITE)
                            .stroke(Stroke::new(1.0, theme::GRAY_300)),
                    )
                    .clicked()
                {
                    app.calendar_month = next_month(app.calendar_month);
                }
                ui.separator();

                egui::Grid::new("mini_calendar")
                    .num_columns(7)
                    .min_col_width(32.0)
                    .show(ui, |ui| {
                        for name in ["Su", "Mo", "Tu", "We", "Thu", "Fr", "Sa"] {
                            ui.label(RichText::new(name).size(11.0).color(theme::GRAY_500));
                        }
                        ui.end_row();

                        let sel_start = week_start(app.current_date);
                        let sel_end = add_days(sel_start, 6);
                        let mut day = grid_start(app.calendar_month);
                        let last = grid_end(app.calendar_month);
                        while day <= last {
                            let in_range = day >= sel_start && day <= sel_end;
                            let in_month = same_month(day, app.calendar_month);
                            let mut text =
                                RichText::new(format!("{}", day.day())).size(12.0);
                            text = if in_month {
                                text.color(theme::GRAY_900)
                            } else {
                                text.color(theme::GRAY_400)
                            };
                            if is_today(day) {
                                text = text.strong();
                            }
                            let fill = if in_range {
                                theme::BLUE_SELECTED
                            } else {
                                theme::WHITE
                            };
                            if ui
                                .add(
                                    egui::Button::new(text)
                                        .fill(fill)
                                        .stroke(Stroke::NONE)
                                        .min_size(egui::vec2(32.0, 32.0)),
                                )
                                .clicked()
                            {
                                app.select_date(day);
                            }
                            if day.weekday().num_days_from_sunday() == 6 {
                                ui.end_row();
                            }
                            day = add_days(day, 1);
                        }
                    });
            });
    });
}

fn previous_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// First cell of the mini-calendar grid: the Sunday on or before the 1st.
fn grid_start(month: NaiveDate) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(month.year(), month.month(), 1).unwrap_or(month);
    week_start(first)
}

/// Last cell: the Saturday on or after the final day of the month.
fn grid_end(month: NaiveDate) -> NaiveDate {
    let last_day = days_in_month(month.year(), month.month());
    let last = NaiveDate::from_ymd_opt(month.year(), month.month(), last_day).unwrap_or(month);
    add_days(week_start(last), 6)
}
