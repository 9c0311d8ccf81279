//! The week grid: day headers, 24 hour rows starting at 9 AM, event cards,
//! drag preview, current-time line, and the availability footer.

use chrono::{Datelike, Local, NaiveDate};
use egui::{pos2, vec2, Align2, FontId, Rect, RichText, ScrollArea, Sense, Stroke, Ui};

use crate::services::grid::drag::{DragOutcome, GridMetrics};
use crate::services::grid::layout::place;
use crate::services::grid::{
    availability::available_hours, hour_slots, slot_row_for_hour, BREAK_HOUR, SLOT_COUNT,
    WORK_END_HOUR, WORK_START_HOUR,
};
use crate::services::timezone::zone_now;
use crate::ui_egui::app::CalendarApp;
use crate::ui_egui::theme::{self, event_colors, GridPalette};
use crate::utils::date::{
    format_day_header, format_hour_12h, format_time_label, is_today, ordinal_suffix,
};

pub const TIME_GUTTER_WIDTH: f32 = 80.0;
pub const ROW_HEIGHT: f32 = 72.0;

pub fn show(ui: &mut Ui, app: &mut CalendarApp) {
    let palette = GridPalette::default();
    let dates = app.week_dates();

    header_row(ui, &dates, &palette);

    let footer_height = 40.0;
    let body_height = (ui.available_height() - footer_height).max(ROW_HEIGHT);
    ScrollArea::vertical()
        .max_height(body_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            grid_body(ui, app, &dates, &palette);
        });

    footer_row(ui, app, &palette);
}

fn header_row(ui: &mut Ui, dates: &[NaiveDate; 7], palette: &GridPalette) {
    let width = ui.available_width();
    let col_width = (width - TIME_GUTTER_WIDTH) / 7.0;
    let (rect, _) = ui.allocate_exact_size(vec2(width, 44.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, palette.header_bg);

    for (i, date) in dates.iter().enumerate() {
        let x = rect.left() + TIME_GUTTER_WIDTH + i as f32 * col_width;
        let center = pos2(x + col_width / 2.0, rect.center().y);
        let (name, number) = format_day_header(*date);
        let today = is_today(*date);

        let name_color = if today {
            palette.today_accent
        } else {
            palette.header_text
        };
        painter.text(
            center - vec2(14.0, 0.0),
            Align2::CENTER_CENTER,
            name,
            FontId::proportional(12.0),
            name_color,
        );
        let badge_center = center + vec2(18.0, 0.0);
        if today {
            painter.circle_filled(badge_center, 11.0, palette.today_accent);
        }
        painter.text(
            badge_center,
            Align2::CENTER_CENTER,
            number,
            FontId::proportional(12.0),
            if today { theme::WHITE } else { palette.header_text },
        );
        painter.line_segment(
            [pos2(x, rect.top()), pos2(x, rect.bottom())],
            Stroke::new(1.0, theme::GRAY_100),
        );
    }
    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(1.0, theme::GRAY_200),
    );
}

fn grid_body(ui: &mut Ui, app: &mut CalendarApp, dates: &[NaiveDate; 7], palette: &GridPalette) {
    let width = ui.available_width();
    let height = SLOT_COUNT as f32 * ROW_HEIGHT;
    let (full_rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
    let body_rect = Rect::from_min_max(
        pos2(full_rect.left() + TIME_GUTTER_WIDTH, full_rect.top()),
        full_rect.right_bottom(),
    );
    let metrics = GridMetrics::new(body_rect, ROW_HEIGHT);
    let painter = ui.painter_at(full_rect);
    let slots = hour_slots();

    // Cells and hour labels.
    for (row, hour) in slots.iter().enumerate() {
        let y = full_rect.top() + row as f32 * ROW_HEIGHT;
        painter.text(
            pos2(full_rect.left() + TIME_GUTTER_WIDTH - 8.0, y + 10.0),
            Align2::RIGHT_CENTER,
            format_hour_12h(*hour),
            FontId::proportional(13.0),
            palette.time_label,
        );

        for col in 0..7 {
            let cell = Rect::from_min_size(
                pos2(body_rect.left() + col as f32 * metrics.column_width, y),
                vec2(metrics.column_width, ROW_HEIGHT),
            );
            let kind = cell_kind(col, *hour);
            let (fill, border) = match kind {
                CellKind::Open => (palette.cell_bg, palette.cell_border),
                CellKind::Weekend => (palette.weekend_bg, palette.gray_area_border),
                CellKind::Break | CellKind::Unavailable => {
                    (palette.gray_area_bg, palette.gray_area_border)
                }
            };
            painter.rect_filled(cell, 0.0, fill);
            painter.rect_stroke(cell, 0.0, Stroke::new(0.5, border));

            if kind != CellKind::Open {
                gray_cell_tooltip(ui, cell, dates[col], col, kind, palette);
            }
        }
    }

    draw_events(ui, app, &metrics, &painter);
    drive_drag(ui, app, &metrics);
    draw_preview(app, &metrics, &painter, palette);
    draw_time_line(app, dates, &metrics, &painter, palette);
}

#[derive(Clone, Copy, PartialEq)]
enum CellKind {
    Open,
    Weekend,
    Break,
    Unavailable,
}

fn cell_kind(col: usize, hour: u8) -> CellKind {
    let weekend = col == 0 || col == 6;
    if hour == BREAK_HOUR {
        CellKind::Break
    } else if !(WORK_START_HOUR..WORK_END_HOUR).contains(&hour) {
        CellKind::Unavailable
    } else if weekend {
        CellKind::Weekend
    } else {
        CellKind::Open
    }
}

/// Hover card for gray areas, mirroring the cell's availability story.
fn gray_cell_tooltip(
    ui: &mut Ui,
    cell: Rect,
    date: NaiveDate,
    col: usize,
    kind: CellKind,
    palette: &GridPalette,
) {
    let id = ui.id().with(("gray_cell", col, cell.top() as i32));
    let response = ui.interact(cell, id, Sense::hover());
    if !response.hovered() {
        return;
    }

    let (title, detail) = match kind {
        CellKind::Break => ("Break Time:".to_string(), "1 PM - 2 PM".to_string()),
        _ => {
            let day = date.day();
            let title = format!(
                "{}, {}{} availability:",
                short_day_name(date),
                day,
                ordinal_suffix(day)
            );
            let detail = if (1..=5).contains(&col) && kind == CellKind::Unavailable {
                "09 AM - 06 PM".to_string()
            } else {
                "-".to_string()
            };
            (title, detail)
        }
    };

    egui::show_tooltip_at_pointer(ui.ctx(), ui.layer_id(), id.with("tip"), |ui| {
        egui::Frame::default()
            .fill(palette.tooltip_bg)
            .inner_margin(8.0)
            .rounding(4.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).size(13.0).color(palette.tooltip_text));
                    ui.label(RichText::new(detail).size(11.0).color(palette.tooltip_text));
                });
            });
    });
}

fn short_day_name(date: NaiveDate) -> &'static str {
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        [date.weekday().num_days_from_sunday() as usize]
}

fn draw_events(ui: &mut Ui, app: &mut CalendarApp, metrics: &GridMetrics, painter: &egui::Painter) {
    let dragging = app.drag.dragging_id();
    let placed = place(&app.events);

    let mut clicked = None;
    let mut drag_begin = None;

    for placement in &placed {
        if dragging == Some(placement.event_id) {
            continue;
        }
        let Some(event) = app.event(placement.event_id) else {
            continue;
        };

        let top = metrics.rect.top()
            + placement.row as f32 * ROW_HEIGHT
            + placement.minute_offset as f32 / 60.0 * ROW_HEIGHT;
        let rect = Rect::from_min_size(
            pos2(
                metrics.rect.left() + placement.column as f32 * metrics.column_width + 1.0,
                top + 2.0,
            ),
            vec2(
                metrics.column_width - 2.0,
                placement.height_slots as f32 * ROW_HEIGHT - 8.0,
            ),
        );

        let (fill, border) = event_colors(event.kind);
        painter.rect_filled(rect, 4.0, fill);
        painter.rect_stroke(rect, 4.0, Stroke::new(1.0, border));
        painter.text(
            rect.left_top() + vec2(6.0, 6.0),
            Align2::LEFT_TOP,
            &event.title,
            FontId::proportional(12.0),
            theme::GRAY_900,
        );
        painter.text(
            rect.left_top() + vec2(6.0, 22.0),
            Align2::LEFT_TOP,
            &event.time_label,
            FontId::proportional(10.0),
            theme::GRAY_700,
        );
        if !event.is_busy() {
            painter.circle_filled(
                rect.right_top() + vec2(-8.0, 8.0),
                3.0,
                theme::GREEN_500,
            );
        }

        let response = ui.interact(
            rect,
            ui.id().with(("event", placement.event_id)),
            Sense::click_and_drag(),
        );
        if response.clicked() {
            clicked = Some(placement.event_id);
        }
        if response.drag_started() {
            if let Some(pointer) = response.interact_pointer_pos() {
                drag_begin = Some((placement.event_id, pointer, pointer - rect.left_top()));
            }
        }
    }

    if let Some(id) = clicked {
        app.detail_popup = Some(id);
    }
    if let Some((id, pointer, offset)) = drag_begin {
        if let Some(event) = app.event(id).cloned() {
            app.drag.begin(&event, pointer, offset, metrics);
        }
    }
}

fn drive_drag(ui: &mut Ui, app: &mut CalendarApp, metrics: &GridMetrics) {
    if !app.drag.is_dragging() {
        return;
    }
    if let Some(pointer) = ui.input(|i| i.pointer.interact_pos()) {
        app.drag.update(pointer, metrics, &app.events);
    }
    if ui.input(|i| i.pointer.any_released()) {
        match app.drag.release(&app.events) {
            DragOutcome::Moved { event_id, position } => app.apply_move(event_id, position),
            DragOutcome::OpenDetail(event_id) => app.detail_popup = Some(event_id),
            DragOutcome::AwaitingBreakConfirm(_)
            | DragOutcome::Cancelled
            | DragOutcome::None => {}
        }
    }
}

/// Ghost card at the candidate slot while a drag is live, colored by
/// whether the drop would be accepted.
fn draw_preview(
    app: &CalendarApp,
    metrics: &GridMetrics,
    painter: &egui::Painter,
    palette: &GridPalette,
) {
    let Some(candidate) = app.drag.preview() else {
        return;
    };
    let Some(id) = app.drag.dragging_id() else {
        return;
    };
    let Some(event) = app.event(id) else {
        return;
    };

    let row = slot_row_for_hour(candidate.position.hour);
    let top = metrics.rect.top()
        + row as f32 * ROW_HEIGHT
        + candidate.position.minutes as f32 / 60.0 * ROW_HEIGHT;
    let rect = Rect::from_min_size(
        pos2(
            metrics.rect.left() + candidate.position.day as f32 * metrics.column_width + 1.0,
            top + 2.0,
        ),
        vec2(
            metrics.column_width - 2.0,
            event.duration_hours().max(1) as f32 * ROW_HEIGHT - 8.0,
        ),
    );

    let (fill, border, badge) = if candidate.valid {
        (
            palette.preview_valid,
            palette.preview_valid_border,
            theme::GREEN_500,
        )
    } else {
        (
            palette.preview_invalid,
            palette.preview_invalid_border,
            theme::RED_500,
        )
    };
    painter.rect_filled(rect, 4.0, fill);
    painter.rect_stroke(rect, 4.0, Stroke::new(1.5, border));
    painter.circle_filled(rect.left_top() + vec2(8.0, 8.0), 4.0, badge);

    let end_hour = candidate.position.hour + event.duration_hours().max(1);
    let label = format_time_label(
        candidate.position.hour,
        candidate.position.minutes,
        end_hour,
        candidate.position.minutes,
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(11.0),
        theme::GRAY_700,
    );
}

/// Red line with a dot at the current time in the selected zone, drawn
/// across today's column only.
fn draw_time_line(
    app: &CalendarApp,
    dates: &[NaiveDate; 7],
    metrics: &GridMetrics,
    painter: &egui::Painter,
    palette: &GridPalette,
) {
    let today = Local::now().date_naive();
    let Some(col) = dates.iter().position(|d| *d == today) else {
        return;
    };
    let (hour, minute) = zone_now(&app.settings.timezone);
    let row = slot_row_for_hour(hour);
    let y = metrics.rect.top() + (row as f32 + minute as f32 / 60.0) * ROW_HEIGHT;
    let x_start = metrics.rect.left() + col as f32 * metrics.column_width;
    let x_end = x_start + metrics.column_width;

    painter.circle_filled(pos2(x_start, y), 3.0, palette.time_line);
    painter.line_segment(
        [pos2(x_start, y), pos2(x_end, y)],
        Stroke::new(2.0, palette.time_line),
    );
}

fn footer_row(ui: &mut Ui, app: &CalendarApp, palette: &GridPalette) {
    let width = ui.available_width();
    let col_width = (width - TIME_GUTTER_WIDTH) / 7.0;
    let (rect, _) = ui.allocate_exact_size(vec2(width, 36.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, palette.header_bg);
    painter.line_segment(
        [rect.left_top(), rect.right_top()],
        Stroke::new(1.0, theme::GRAY_200),
    );

    for col in 0..7u8 {
        let slots = available_hours(col, &app.events);
        let x = rect.left() + TIME_GUTTER_WIDTH + col as f32 * col_width;
        painter.text(
            pos2(x + 10.0, rect.center().y),
            Align2::LEFT_CENTER,
            format!("Available slots: {}", slots),
            FontId::proportional(11.0),
            theme::GRAY_500,
        );
    }
}
