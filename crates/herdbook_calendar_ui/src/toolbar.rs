use egui::RichText;
use herdbook_calendar::{CalendarAction, CalendarPage, SelectionMode};

pub fn toolbar_ui(page: &CalendarPage, ui: &mut egui::Ui, actions: &mut Vec<CalendarAction>) {
    ui.horizontal(|ui| {
        if ui.button("◀").on_hover_text("Previous month").clicked() {
            actions.push(CalendarAction::PreviousMonth);
        }

        if ui.button("Today").clicked() {
            actions.push(CalendarAction::Today);
        }

        if ui.button("▶").on_hover_text("Next month").clicked() {
            actions.push(CalendarAction::NextMonth);
        }

        ui.separator();

        ui.label(RichText::new(page.cursor().title()).size(18.0).strong());

        ui.separator();

        let mode = page.selection().mode();
        for (label, candidate) in [
            ("Single", SelectionMode::Single),
            ("Multiple", SelectionMode::Multiple),
            ("Range", SelectionMode::Range),
        ] {
            if ui.selectable_label(mode == candidate, label).clicked() && mode != candidate {
                actions.push(CalendarAction::SetSelectionMode(candidate));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🔄 Refresh").clicked() {
                actions.push(CalendarAction::Refresh);
            }
        });
    });
}
