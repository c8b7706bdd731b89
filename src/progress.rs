// src/progress.rs
use crate::config::options::SourceKind;
use crate::error::ScrapeError;

/// Status sink for a scrape. Frontends (GUI/CLI) implement this to surface
/// what is happening to users.
pub trait Progress {
    /// Called before the fetch starts.
    fn begin(&mut self, _source: SourceKind) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Live data could not be used; default rows are being shown instead.
    fn failed(&mut self, _source: SourceKind, _reason: &ScrapeError) {}

    /// Called at the end with the one-line summary, successful or not.
    fn finish(&mut self, _summary: &str) {}
}
