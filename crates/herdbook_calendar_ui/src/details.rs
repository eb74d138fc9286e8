use egui::{vec2, CornerRadius, RichText, Sense};
use herdbook_calendar::{CalendarPage, HealthEvent};

use crate::style::{event_color, event_subtitle, selection_summary};

const UPCOMING_LIMIT: usize = 8;

/// Side panel: events on the selected days, then what's coming up.
pub fn details_ui(page: &CalendarPage, ui: &mut egui::Ui) {
    ui.heading(selection_summary(page.selection()));
    ui.add_space(4.0);

    if !page.selection().is_empty() {
        let selected = page.selected_events();
        if selected.is_empty() {
            ui.label(RichText::new("Nothing scheduled.").weak());
        }
        for event in selected {
            event_card_ui(event, ui);
        }
    }

    ui.add_space(12.0);
    ui.separator();
    ui.label(RichText::new("Upcoming").strong());
    ui.add_space(4.0);

    let upcoming = page.upcoming(UPCOMING_LIMIT);
    if upcoming.is_empty() {
        ui.label(RichText::new("No upcoming events.").weak());
    }
    for event in upcoming {
        event_card_ui(event, ui);
    }
}

fn event_card_ui(event: &HealthEvent, ui: &mut egui::Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let (swatch, _) = ui.allocate_exact_size(vec2(8.0, 8.0), Sense::hover());
            ui.painter()
                .rect_filled(swatch, CornerRadius::same(4), event_color(event));
            ui.label(RichText::new(&event.title).strong());
        });

        ui.label(
            RichText::new(format!(
                "{} · {}",
                event.date.day().format("%a %b %e"),
                event.category.display_label()
            ))
            .small()
            .weak(),
        );

        if let Some(subtitle) = event_subtitle(event) {
            ui.label(RichText::new(subtitle).small());
        }

        if let Some(description) = &event.description {
            ui.label(description.as_str());
        }
    });
}
