use std::path::PathBuf;

use chrono::Local;
use herdbook_calendar::{
    CalendarAction, CalendarConfig, CalendarPage, EventSource, JsonFileSource, MockEventSource,
    NaiveDate,
};
use herdbook_calendar_ui::{calendar_ui, details_ui};
use tracing::{error, info};

use crate::{Args, DataPath};

/// The vaccination scheduler: a month calendar of herd health events with
/// a details panel for the selected days.
pub struct HerdbookApp {
    page: CalendarPage,
    source: Box<dyn EventSource>,
    /// Settings as stored on disk, without command line overrides.
    settings: CalendarConfig,
    config_path: PathBuf,
    light: bool,
    load_error: Option<String>,
}

impl HerdbookApp {
    pub fn new(args: &Args, path: &DataPath) -> Self {
        let config_path = path.calendar_config();
        let config = CalendarConfig::load(&config_path).unwrap_or_else(|err| {
            error!("failed to load calendar settings, using defaults: {err}");
            CalendarConfig::default()
        });

        let page = CalendarPage::new(config);
        let source = Self::pick_source(args, path, &page);

        Self::with_parts(page, source, config_path, args)
    }

    /// Builds the app from already constructed pieces. The page's config is
    /// taken as the stored settings and `args` overrides apply on top of it
    /// for this session only. Events are loaded from `source` immediately.
    pub fn with_parts(
        mut page: CalendarPage,
        mut source: Box<dyn EventSource>,
        config_path: PathBuf,
        args: &Args,
    ) -> Self {
        let settings = page.config().clone();

        if let Some(week_start) = args.week_start {
            page.set_week_start(week_start);
        }

        if let Some(month) = args.month {
            page.set_cursor(month);
        }

        let load_error = page.refresh(source.as_mut()).err().map(|e| e.to_string());

        Self {
            page,
            source,
            settings,
            config_path,
            light: args.light,
            load_error,
        }
    }

    fn pick_source(args: &Args, path: &DataPath, page: &CalendarPage) -> Box<dyn EventSource> {
        let file = match &args.events {
            Some(events) => Some(JsonFileSource::new(events)),
            None => Some(path.events_file())
                .filter(|file| file.is_file())
                .map(JsonFileSource::new),
        };

        if let Some(file) = file {
            info!("reading events from {}", file.path().display());
            return Box::new(file);
        }

        info!("no event file found, using seeded demo events");
        Box::new(MockEventSource::new(page.today()))
    }

    pub fn page(&self) -> &CalendarPage {
        &self.page
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn settings(&self) -> &CalendarConfig {
        &self.settings
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.page.set_today(today);
    }

    pub fn process_actions(&mut self, actions: Vec<CalendarAction>) {
        for action in actions {
            let new_mode = match action {
                CalendarAction::SetSelectionMode(mode) => Some(mode),
                _ => None,
            };

            if self.page.process_action(action) {
                self.load_error = self
                    .page
                    .refresh(self.source.as_mut())
                    .err()
                    .map(|e| e.to_string());
            }

            if let Some(mode) = new_mode {
                self.settings.selection_mode = mode;
                if let Err(err) = self.settings.save(&self.config_path) {
                    error!("failed to save calendar settings: {err}");
                }
            }
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        self.set_today(Local::now().date_naive());

        let mut actions = Vec::new();

        egui::SidePanel::right("herdbook-details")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("herdbook-details-scroll")
                    .show(ui, |ui| details_ui(&self.page, ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.load_error {
                ui.colored_label(ui.visuals().error_fg_color, format!("Could not load events: {err}"));
                ui.add_space(4.0);
            }

            egui::ScrollArea::vertical()
                .id_salt("herdbook-month-scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    actions = calendar_ui(&self.page, ui);
                });
        });

        self.process_actions(actions);
    }

    pub fn apply_theme(&self, ctx: &egui::Context) {
        if self.light {
            ctx.set_visuals(egui::Visuals::light());
        } else {
            ctx.set_visuals(egui::Visuals::dark());
        }
    }
}

impl eframe::App for HerdbookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
