// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_OUT_DIR;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// One entry per scraped page. Each has its own schema under `specs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Efficiency,
    Ranking,
    Odds,
    OddsPortal,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Efficiency,
        SourceKind::Ranking,
        SourceKind::Odds,
        SourceKind::OddsPortal,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SourceKind::Efficiency => "Efficiency (BartTorvik)",
            SourceKind::Ranking    => "Rankings (KenPom)",
            SourceKind::Odds       => "Odds (VegasInsider)",
            SourceKind::OddsPortal => "Odds (OddsPortal)",
        }
    }

    /// Name used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            SourceKind::Efficiency => "efficiency",
            SourceKind::Ranking    => "ranking",
            SourceKind::Odds       => "odds",
            SourceKind::OddsPortal => "oddsportal",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.slug() == s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub source: SourceKind,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { source: SourceKind::Efficiency }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    /// Parse GUI/CLI text into the output directory. Blank keeps the current one.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if !s.is_empty() {
            self.out_dir = PathBuf::from(crate::file::normalize_separators(s));
        }
    }
}
