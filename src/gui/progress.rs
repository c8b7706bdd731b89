// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::{config::options::SourceKind, error::ScrapeError, progress::Progress};

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    failed: bool,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, failed: false }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap_or_else(|p| p.into_inner()) = text;
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, source: SourceKind) {
        self.failed = false;
        self.set_status(format!("Scraping {}…", source.title()));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn failed(&mut self, _source: SourceKind, _reason: &ScrapeError) {
        self.failed = true;
    }
    fn finish(&mut self, summary: &str) {
        // Summary already carries the reason when default rows are shown.
        if self.failed {
            self.set_status(join!("⚠ ", summary));
        } else {
            self.set_status(s!(summary));
        }
    }
}
