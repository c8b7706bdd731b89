// src/specs/odds.rs
//! Sportsbook odds. Two page shapes, one record:
//! - VegasInsider: a plain `table#odds-table`, six leading cells per game.
//! - OddsPortal: no table; each game is a `div.eventRow` holding two
//!   `span.team-name` and at least four `span.odds-value`.
//!
//! Odds stay as text. Books mix `-3.5`, `PK`, `o151½`, `+135`, `EVEN` and a
//! blank means "no line yet"; none of that is coerced.

use crate::config::consts::{ODDSPORTAL_URL, VEGASINSIDER_URL};
use crate::config::options::SourceKind;
use crate::core::html::Locator;
use crate::error::CellError;
use crate::scrape::normalize::Cells;

use super::Record;
use super::schema::{CellGroup, RowLayout, Schema};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OddsRecord {
    pub team_a: String,
    pub team_b: String,
    pub spread: String,
    pub over_under: String,
    pub moneyline_a: String,
    pub moneyline_b: String,
}

#[derive(Clone, Copy, Debug)]
pub struct OddsColumns {
    pub team_a: usize,
    pub team_b: usize,
    pub spread: usize,
    pub over_under: usize,
    pub moneyline_a: usize,
    pub moneyline_b: usize,
}

const HEADERS: &[&str] = &["Team A", "Team B", "Spread", "Over/Under", "Moneyline A", "Moneyline B"];

const LEADING_SIX: OddsColumns = OddsColumns {
    team_a: 0,
    team_b: 1,
    spread: 2,
    over_under: 3,
    moneyline_a: 4,
    moneyline_b: 5,
};

pub static SCHEMA: Schema<OddsRecord> = Schema {
    source: SourceKind::Odds,
    url: VEGASINSIDER_URL,
    login_url: None,
    locator: Locator::Id { tag: "table", id: "odds-table" },
    layout: RowLayout::Table,
    min_columns: 6,
    columns: LEADING_SIX,
    headers: HEADERS,
    snapshot_stem: "vegasinsider_odds",
    fallback: Vec::new,
    fixture: TABLE_FIXTURE,
};

pub static PORTAL_SCHEMA: Schema<OddsRecord> = Schema {
    source: SourceKind::OddsPortal,
    url: ODDSPORTAL_URL,
    login_url: None,
    locator: Locator::Document,
    layout: RowLayout::Blocks {
        row: "div.eventRow",
        groups: &[
            CellGroup { css: "span.team-name", take: 2 },
            CellGroup { css: "span.odds-value", take: 4 },
        ],
    },
    min_columns: 6,
    columns: LEADING_SIX,
    headers: HEADERS,
    snapshot_stem: "oddsportal_odds",
    fallback: Vec::new,
    fixture: PORTAL_FIXTURE,
};

const TABLE_FIXTURE: &str = r#"<table id="odds-table">
<tr><th>Away</th><th>Home</th><th>Spread</th><th>Total</th><th>ML Away</th><th>ML Home</th></tr>
<tr><td>Duke</td><td>North Carolina</td><td>-3.5</td><td>151.5</td><td>-160</td><td>+135</td></tr>
</table>"#;

const PORTAL_FIXTURE: &str = r#"<div class="eventRow">
<span class="team-name">Duke</span><span class="team-name">North Carolina</span>
<span class="odds-value">-3.5</span><span class="odds-value">151.5</span>
<span class="odds-value">-160</span><span class="odds-value">+135</span>
</div>"#;

impl Record for OddsRecord {
    type Columns = OddsColumns;

    fn from_cells(cells: &Cells<'_>, col: &OddsColumns) -> Result<Self, CellError> {
        Ok(Self {
            team_a: s!(cells.raw(col.team_a)?),
            team_b: s!(cells.raw(col.team_b)?),
            spread: s!(cells.raw(col.spread)?),
            over_under: s!(cells.raw(col.over_under)?),
            moneyline_a: s!(cells.raw(col.moneyline_a)?),
            moneyline_b: s!(cells.raw(col.moneyline_b)?),
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.team_a.clone(),
            self.team_b.clone(),
            self.spread.clone(),
            self.over_under.clone(),
            self.moneyline_a.clone(),
            self.moneyline_b.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odds_text_is_passed_through() {
        let row: Vec<String> = ["Kansas", "Baylor", "PK", "o139½", "EVEN", "", "extra"]
            .iter()
            .map(|c| s!(*c))
            .collect();
        let rec = OddsRecord::from_cells(&Cells::new(&row), &LEADING_SIX).unwrap();
        assert_eq!(rec.spread, "PK");
        assert_eq!(rec.over_under, "o139½");
        assert_eq!(rec.moneyline_a, "EVEN");
        assert_eq!(rec.moneyline_b, "");
        assert_eq!(rec.to_row().len(), HEADERS.len());
    }

    #[test]
    fn both_layouts_share_headers_and_fall_back_empty() {
        assert_eq!(SCHEMA.headers, PORTAL_SCHEMA.headers);
        assert!((SCHEMA.fallback)().is_empty());
        assert!((PORTAL_SCHEMA.fallback)().is_empty());
    }
}
