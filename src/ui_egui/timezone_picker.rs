//! Grouped, searchable timezone dropdown with live clocks.

use egui::{Align2, Area, Color32, Frame, Order, RichText, ScrollArea, Stroke, Ui};

use crate::models::timezone::{label_for, ZONE_REGIONS};
use crate::services::timezone::zone_clock;
use crate::ui_egui::theme;

#[derive(Default)]
pub struct TimezonePickerState {
    pub open: bool,
    pub search: String,
}

/// The selector button plus its dropdown. Returns the newly selected zone
/// id, if any.
pub fn show(ui: &mut Ui, state: &mut TimezonePickerState, current_zone: &str) -> Option<String> {
    let mut selected = None;

    let label = format!("🌐 {}  {}", label_for(current_zone), zone_clock(current_zone));
    let button = ui.add(
        egui::Button::new(RichText::new(label).size(13.0).color(theme::GRAY_900))
            .fill(theme::WHITE)
            .stroke(Stroke::new(1.0, theme::GRAY_300))
            .min_size(egui::vec2(320.0, 34.0)),
    );
    if button.clicked() {
        state.open = !state.open;
        state.search.clear();
    }

    if !state.open {
        return None;
    }

    let anchor = button.rect.left_bottom() + egui::vec2(0.0, 4.0);
    let area = Area::new(ui.id().with("tz_dropdown"))
        .order(Order::Foreground)
        .fixed_pos(anchor)
        .pivot(Align2::LEFT_TOP);

    let response = area.show(ui.ctx(), |ui| {
        Frame::popup(ui.style())
            .fill(theme::WHITE)
            .stroke(Stroke::new(1.0, theme::GRAY_300))
            .show(ui, |ui| {
                ui.set_min_width(320.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("🔍").color(theme::GRAY_400));
                    ui.add(
                        egui::TextEdit::singleline(&mut state.search)
                            .hint_text("Search by city or region...")
                            .desired_width(280.0),
                    );
                });
                ui.separator();

                let needle = state.search.to_lowercase();
                let mut any = false;

                ScrollArea::vertical().max_height(256.0).show(ui, |ui| {
                    for region in ZONE_REGIONS {
                        let options: Vec<_> = region
                            .options
                            .iter()
                            .filter(|opt| {
                                needle.is_empty() || opt.label.to_lowercase().contains(&needle)
                            })
                            .collect();
                        if options.is_empty() {
                            continue;
                        }
                        any = true;

                        ui.label(
                            RichText::new(region.label.to_uppercase())
                                .size(11.0)
                                .color(theme::GRAY_500),
                        );
                        for option in options {
                            let is_current = option.id == current_zone;
                            let row = ui
                                .horizontal(|ui| {
                                    if is_current {
                                        let rect = ui.max_rect();
                                        ui.painter().rect_filled(
                                            rect,
                                            2.0,
                                            Color32::from_rgb(219, 234, 254),
                                        );
                                    }
                                    ui.label(RichText::new(option.label).size(13.0));
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            ui.label(
                                                RichText::new(zone_clock(option.id))
                                                    .size(13.0)
                                                    .color(theme::GRAY_500),
                                            );
                                        },
                                    );
                                })
                                .response;
                            if row.interact(egui::Sense::click()).clicked() {
                                selected = Some(option.id.to_string());
                                state.open = false;
                            }
                        }
                        ui.add_space(4.0);
                    }

                    if !any {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("No timezones found")
                                    .size(13.0)
                                    .color(theme::GRAY_500),
                            );
                        });
                    }
                });
            });
    });

    // Close when clicking anywhere else.
    if ui.input(|i| i.pointer.any_click())
        && !response.response.hovered()
        && !button.hovered()
    {
        state.open = false;
    }

    selected
}
