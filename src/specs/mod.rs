// src/specs/mod.rs
//! # Source “specs”
//!
//! One module per scraped page. Each owns a `static SCHEMA` (URL, selector,
//! row layout, column positions, headers, fallback rows, fixture) and the typed
//! record its rows turn into.
//!
//! ## What lives here
//! - The **column map** of every page, in one place per page.
//! - **Cell → field coercion** for that page's record (`Record::from_cells`).
//! - The **fallback rows** shown when the page can't be fetched or read.
//!
//! ## What does **not** live here
//! - Networking, DOM walking, the fetch/fallback decision (`core`, `scrape`).
//! - Display and export (`gui`, `cli`, `file`).
//!
//! ## Conventions & invariants
//! - Positions are fixed per page, never inferred from header text.
//! - Every schema's fixture must produce at least one record; `validate_all`
//!   runs them at startup so selector or index drift shows up immediately.

use std::fmt;

use crate::error::{CellError, SchemaError};
use crate::scrape::normalize::Cells;
use crate::scrape::pipeline::parse_markup;

pub mod efficiency;
pub mod odds;
pub mod ranking;
pub mod schema;

pub use efficiency::EfficiencyRecord;
pub use odds::OddsRecord;
pub use ranking::RankingRecord;
pub use schema::Schema;

/// A typed row produced from one table row.
pub trait Record: Sized + Clone + fmt::Debug + PartialEq + 'static {
    /// Field → column position map for this record's page(s).
    type Columns: fmt::Debug + Sync + 'static;

    fn from_cells(cells: &Cells<'_>, columns: &Self::Columns) -> Result<Self, CellError>;

    /// Cell texts in header order.
    fn to_row(&self) -> Vec<String>;
}

/// Floats render the way they read in the source tables (`105.0`, `0.052`).
pub(crate) fn fmt_float(v: f64) -> String {
    format!("{v:?}")
}

fn check<R: Record>(schema: &Schema<R>) -> Result<(), SchemaError> {
    let set = parse_markup(schema, schema.fixture).map_err(|e| match e {
        crate::error::ScrapeError::Schema(inner) => inner,
        other => SchemaError::Fixture { kind: schema.source, reason: other.to_string() },
    })?;
    if set.is_empty() {
        return Err(SchemaError::Fixture {
            kind: schema.source,
            reason: format!("no records ({} rows dropped)", set.dropped()),
        });
    }
    logd!("Schema: {:?} ok ({} fixture records)", schema.source, set.len());
    Ok(())
}

/// Run every schema against its own fixture.
pub fn validate_all() -> Result<(), SchemaError> {
    check(&efficiency::SCHEMA)?;
    check(&ranking::SCHEMA)?;
    check(&odds::SCHEMA)?;
    check(&odds::PORTAL_SCHEMA)?;
    Ok(())
}
