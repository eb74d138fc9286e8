mod details;
mod month;
mod style;
mod toolbar;

pub use details::details_ui;
pub use month::month_view_ui;
pub use style::{event_color, event_subtitle, overflow_count, selection_summary};
pub use toolbar::toolbar_ui;

use herdbook_calendar::{CalendarAction, CalendarPage};

/// Draws the toolbar and month grid for `page` and returns what the user
/// did. The caller applies the actions with
/// [`CalendarPage::process_action`].
pub fn calendar_ui(page: &CalendarPage, ui: &mut egui::Ui) -> Vec<CalendarAction> {
    let mut actions = Vec::new();

    toolbar_ui(page, ui, &mut actions);
    ui.separator();

    let grid = page.grid();
    month_view_ui(&grid, page.config(), ui, &mut actions);

    actions
}
