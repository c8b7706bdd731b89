// src/scrape/pipeline.rs
//
// fetch → locate → rows → normalize, or the schema's fallback rows.
// Always returns a well-formed report; the status says which path was taken.

use crate::config::credentials::CredentialConfig;
use crate::config::options::SourceKind;
use crate::core::html;
use crate::core::net::Fetch;
use crate::data::{DataSet, RecordSet};
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::specs::schema::Compiled;
use crate::specs::{self, EfficiencyRecord, OddsRecord, RankingRecord, Record, Schema};

use super::{fallback, normalize, rows};

#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    Live,
    Fallback(ScrapeError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeReport<R> {
    pub source: SourceKind,
    pub records: RecordSet<R>,
    pub status: Status,
}

impl<R> ScrapeReport<R> {
    pub fn is_fallback(&self) -> bool {
        matches!(self.status, Status::Fallback(_))
    }

    /// One line for the status bar / stderr.
    pub fn summary(&self) -> String {
        let title = self.source.title();
        match &self.status {
            Status::Live => format!(
                "{title}: {} rows ({} dropped)",
                self.records.len(),
                self.records.dropped()
            ),
            Status::Fallback(e) => format!(
                "{title}: {e}; showing default data ({} rows)",
                self.records.len()
            ),
        }
    }
}

pub fn run<R: Record>(
    schema: &Schema<R>,
    fetcher: &dyn Fetch,
    credentials: &CredentialConfig,
) -> ScrapeReport<R> {
    logf!("Scrape: Begin source={:?} url={}", schema.source, schema.url);

    let (records, status) = match acquire(schema, fetcher, credentials) {
        Ok(set) => {
            logf!(
                "Scrape: OK source={:?} records={} dropped={}",
                schema.source,
                set.len(),
                set.dropped()
            );
            (set, Status::Live)
        }
        Err(e) => {
            logw!("Scrape: {:?} falling back ({})", schema.source, e);
            (fallback::default_dataset(schema), Status::Fallback(e))
        }
    };

    ScrapeReport { source: schema.source, records, status }
}

fn acquire<R: Record>(
    schema: &Schema<R>,
    fetcher: &dyn Fetch,
    credentials: &CredentialConfig,
) -> Result<RecordSet<R>, ScrapeError> {
    let compiled = schema.compile()?;
    let login = schema.login_url.and(credentials.credentials());

    let markup = fetcher.fetch(&schema.request(), login).into_markup()?;
    logd!("Scrape: {:?} fetched {} bytes", schema.source, markup.len());

    match extract(schema, &compiled, &markup) {
        // Same outcome as any missing table; just leave a hint in the log.
        Err(ScrapeError::NotFound(sel)) if login.is_some() => {
            logw!("Scrape: {sel} missing after login; credentials may have been rejected");
            Err(ScrapeError::NotFound(sel))
        }
        other => other,
    }
}

fn extract<R: Record>(
    schema: &Schema<R>,
    compiled: &Compiled,
    markup: &str,
) -> Result<RecordSet<R>, ScrapeError> {
    let doc = html::parse_document(markup);
    let scope = html::locate(&doc, compiled.scope.as_ref())
        .ok_or_else(|| ScrapeError::NotFound(schema.locator.describe()))?;

    let parsed = rows::parse_rows(scope, compiled, schema.min_columns);
    Ok(normalize::normalize(&parsed, &schema.columns))
}

/// Locate → rows → normalize over markup already in hand.
pub fn parse_markup<R: Record>(schema: &Schema<R>, markup: &str) -> Result<RecordSet<R>, ScrapeError> {
    let compiled = schema.compile()?;
    extract(schema, &compiled, markup)
}

pub fn to_dataset<R: Record>(schema: &Schema<R>, set: &RecordSet<R>) -> DataSet {
    DataSet {
        headers: schema.headers(),
        rows: set.iter().map(Record::to_row).collect(),
    }
}

/// A report of whichever source was scraped.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceReport {
    Efficiency(ScrapeReport<EfficiencyRecord>),
    Ranking(ScrapeReport<RankingRecord>),
    Odds(ScrapeReport<OddsRecord>),
}

impl SourceReport {
    pub fn source(&self) -> SourceKind {
        match self {
            SourceReport::Efficiency(r) => r.source,
            SourceReport::Ranking(r) => r.source,
            SourceReport::Odds(r) => r.source,
        }
    }

    pub fn status(&self) -> &Status {
        match self {
            SourceReport::Efficiency(r) => &r.status,
            SourceReport::Ranking(r) => &r.status,
            SourceReport::Odds(r) => &r.status,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.status(), Status::Fallback(_))
    }

    pub fn summary(&self) -> String {
        match self {
            SourceReport::Efficiency(r) => r.summary(),
            SourceReport::Ranking(r) => r.summary(),
            SourceReport::Odds(r) => r.summary(),
        }
    }

    pub fn dataset(&self) -> DataSet {
        match self {
            SourceReport::Efficiency(r) => to_dataset(&specs::efficiency::SCHEMA, &r.records),
            SourceReport::Ranking(r) => to_dataset(&specs::ranking::SCHEMA, &r.records),
            SourceReport::Odds(r) => to_dataset(odds_schema(r.source), &r.records),
        }
    }

    pub fn snapshot_stem(&self) -> &'static str {
        snapshot_stem(self.source())
    }
}

fn odds_schema(kind: SourceKind) -> &'static Schema<OddsRecord> {
    match kind {
        SourceKind::OddsPortal => &specs::odds::PORTAL_SCHEMA,
        _ => &specs::odds::SCHEMA,
    }
}

pub fn snapshot_stem(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Efficiency => specs::efficiency::SCHEMA.snapshot_stem,
        SourceKind::Ranking => specs::ranking::SCHEMA.snapshot_stem,
        SourceKind::Odds | SourceKind::OddsPortal => odds_schema(kind).snapshot_stem,
    }
}

/// Scrape one source end to end, reporting to `progress` if given.
pub fn run_source(
    kind: SourceKind,
    fetcher: &dyn Fetch,
    credentials: &CredentialConfig,
    mut progress: Option<&mut dyn Progress>,
) -> SourceReport {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(kind);
        p.log(&format!("Fetching {}…", kind.title()));
    }

    let report = match kind {
        SourceKind::Efficiency => {
            SourceReport::Efficiency(run(&specs::efficiency::SCHEMA, fetcher, credentials))
        }
        SourceKind::Ranking => {
            SourceReport::Ranking(run(&specs::ranking::SCHEMA, fetcher, credentials))
        }
        SourceKind::Odds | SourceKind::OddsPortal => {
            SourceReport::Odds(run(odds_schema(kind), fetcher, credentials))
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        if let Status::Fallback(e) = report.status() {
            p.failed(kind, e);
        }
        p.finish(&report.summary());
    }
    report
}
