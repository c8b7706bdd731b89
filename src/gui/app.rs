// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        credentials::CredentialConfig,
        options::SourceKind,
        state::AppState,
    },
    core::HttpFetcher,
    data::DataSet,
    error::SchemaError,
    scrape::{SourceReport, fallback},
    specs,
};

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "College Basketball Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state, CredentialConfig::from_env())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub credentials: CredentialConfig,
    pub fetcher: HttpFetcher,

    // output dir text field (mapped onto ExportOptions when applied)
    pub out_dir_text: String,

    // latest report + flattened table per source
    pub reports: HashMap<SourceKind, SourceReport>,
    pub tables: HashMap<SourceKind, DataSet>,

    // set once at startup if a built-in schema no longer matches its fixture
    pub schema_error: Option<SchemaError>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, credentials: CredentialConfig) -> Self {
        let out_dir_text = state.options.export.out_dir.to_string_lossy().into_owned();

        let schema_error = match specs::validate_all() {
            Ok(()) => None,
            Err(e) => {
                loge!("Init: schema check failed: {e}");
                Some(e)
            }
        };

        let mut app = Self {
            state,
            credentials,
            fetcher: HttpFetcher::default(),
            out_dir_text,
            reports: HashMap::new(),
            tables: HashMap::new(),
            schema_error,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };

        logf!("Init: default tab={:?}", app.current());

        // Same as the page-load scrape of the old dashboard.
        if app.schema_error.is_none() {
            super::actions::scrape(&mut app);
        }
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current(&self) -> SourceKind { self.state.gui.current }

    pub fn set_current(&mut self, kind: SourceKind) {
        self.state.gui.current = kind;
        self.state.options.scrape.source = kind;
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|p| p.into_inner()) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn current_report(&self) -> Option<&SourceReport> {
        self.reports.get(&self.current())
    }

    /// Table for the active tab; headers only until it has been scraped.
    pub fn current_table(&self) -> DataSet {
        match self.tables.get(&self.current()) {
            Some(ds) => ds.clone(),
            None => DataSet { headers: fallback::default_table(self.current()).headers, rows: Vec::new() },
        }
    }

    pub fn store_report(&mut self, report: SourceReport) {
        let kind = report.source();
        self.tables.insert(kind, report.dataset());
        self.reports.insert(kind, report);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(e) = &self.schema_error {
                    ui.colored_label(ui.visuals().error_fg_color, format!("Schema check failed: {e}"));
                    ui.separator();
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::action_bar::draw(ui, self);

            ui.separator();

            if self.current() == SourceKind::Efficiency && self.state.gui.show_chart {
                if let Some(SourceReport::Efficiency(report)) = self.current_report() {
                    crate::gui::components::chart::draw(ui, report.records.records());
                    ui.separator();
                }
            }

            let table = self.current_table();
            crate::gui::components::data_table::draw(ui, self.current(), &table);
        });
    }
}
