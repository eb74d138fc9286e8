use chrono::Datelike;
use egui::{vec2, Color32, CornerRadius, Frame, Margin, RichText, Sense, Stroke, Vec2};
use herdbook_calendar::{CalendarAction, CalendarConfig, DayCell, HealthEvent, MonthGrid};

use crate::style::{event_color, overflow_count, ADJACENT_FILL, CELL_STROKE, TODAY_FILL};

const CELL_HEIGHT: f32 = 96.0;
const EVENT_ROW_HEIGHT: f32 = 16.0;

pub fn month_view_ui(
    grid: &MonthGrid<'_, HealthEvent>,
    config: &CalendarConfig,
    ui: &mut egui::Ui,
    actions: &mut Vec<CalendarAction>,
) {
    let cell_size = Vec2::new(((ui.available_width() - 20.0) / 7.0).max(60.0), CELL_HEIGHT);

    ui.horizontal(|ui| {
        for label in grid.weekday_labels() {
            ui.allocate_ui(vec2(cell_size.x, 20.0), |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(label).strong());
                });
            });
        }
    });

    ui.separator();

    for week in grid.weeks() {
        ui.horizontal(|ui| {
            for cell in week {
                ui.allocate_ui(cell_size, |ui| {
                    day_cell_ui(cell, config, cell_size, ui, actions);
                });
            }
        });
    }
}

fn day_cell_ui(
    cell: &DayCell<'_, HealthEvent>,
    config: &CalendarConfig,
    cell_size: Vec2,
    ui: &mut egui::Ui,
    actions: &mut Vec<CalendarAction>,
) {
    let mut frame = Frame::new()
        .inner_margin(Margin::same(2))
        .stroke(Stroke::new(1.0, CELL_STROKE));

    if !cell.is_current_month && !config.show_adjacent_days {
        frame.show(ui, |ui| {
            ui.set_min_size(cell_size - vec2(6.0, 6.0));
        });
        return;
    }

    if cell.is_selected {
        frame = frame.fill(ui.visuals().selection.bg_fill.gamma_multiply(0.5));
    } else if cell.is_today {
        frame = frame.fill(TODAY_FILL);
    } else if !cell.is_current_month {
        frame = frame.fill(ADJACENT_FILL);
    }

    let response = frame.show(ui, |ui| {
        ui.set_min_size(cell_size - vec2(6.0, 6.0));
        ui.vertical(|ui| {
            let mut day_text = RichText::new(cell.date.day().to_string());
            if cell.is_today {
                day_text = day_text.strong();
            }
            if !cell.is_current_month {
                day_text = day_text.color(ui.visuals().weak_text_color());
            }
            ui.label(day_text);

            let max = config.max_events_per_cell.max(1);
            for event in cell.events.iter().take(max) {
                event_chip_ui(event, cell_size.x - 10.0, ui);
            }

            let more = overflow_count(cell.events.len(), max);
            if more > 0 {
                ui.label(
                    RichText::new(format!("+{more} more"))
                        .size(10.0)
                        .color(Color32::from_gray(150)),
                );
            }
        });
    });

    if response.response.interact(Sense::click()).clicked() {
        actions.push(CalendarAction::ClickDay(cell.date));
    }
}

fn event_chip_ui(event: &HealthEvent, width: f32, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.set_max_width(width);
        let (swatch, _) = ui.allocate_exact_size(vec2(4.0, EVENT_ROW_HEIGHT - 4.0), Sense::hover());
        ui.painter()
            .rect_filled(swatch, CornerRadius::same(2), event_color(event));
        ui.add(egui::Label::new(RichText::new(&event.title).size(11.0)).truncate())
            .on_hover_text(event.title.as_str());
    });
}
