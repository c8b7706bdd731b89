// src/specs/ranking.rs
//! KenPom ratings, the one page behind a login.
//!
//! With credentials the fetcher posts `email`/`password` to the login form
//! first and keeps the session cookie for the page GET. Without them the page
//! is fetched anonymously and whatever is visible gets parsed; a rejected
//! login simply shows up later as a missing table.

use crate::config::consts::{KENPOM_LOGIN_URL, KENPOM_URL};
use crate::config::options::SourceKind;
use crate::core::html::Locator;
use crate::error::CellError;
use crate::scrape::normalize::Cells;

use super::schema::{RowLayout, Schema};
use super::{Record, fmt_float};

#[derive(Clone, Debug, PartialEq)]
pub struct RankingRecord {
    pub rank: u32,
    pub team: String,
    pub adjusted_offense: f64,
    pub adjusted_defense: f64,
    pub tempo: f64,
    pub luck: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct RankingColumns {
    pub rank: usize,
    pub team: usize,
    pub adjusted_offense: usize,
    pub adjusted_defense: usize,
    pub tempo: usize,
    pub luck: usize,
}

// The ratings table interleaves a rank cell after each metric, hence the even steps.
pub static SCHEMA: Schema<RankingRecord> = Schema {
    source: SourceKind::Ranking,
    url: KENPOM_URL,
    login_url: Some(KENPOM_LOGIN_URL),
    locator: Locator::Id { tag: "table", id: "ratings-table" },
    layout: RowLayout::Table,
    min_columns: 2,
    columns: RankingColumns {
        rank: 0,
        team: 1,
        adjusted_offense: 4,
        adjusted_defense: 6,
        tempo: 8,
        luck: 10,
    },
    headers: &["Rank", "Team", "AdjO", "AdjD", "Tempo", "Luck"],
    snapshot_stem: "kenpom_data",
    fallback: Vec::new,
    fixture: FIXTURE,
};

const FIXTURE: &str = r#"<table id="ratings-table">
<tr><th>Rk</th><th>Team</th><th>Conf</th><th>W-L</th><th>ORtg</th><th></th><th>DRtg</th><th></th>
<th>AdjT</th><th></th><th>Luck</th></tr>
<tr><td>1</td><td>Team X</td><td>ACC</td><td>25-3</td><td>101.2</td><td>70.5</td><td>99.1</td><td>8</td>
<td>68.2</td><td>300</td><td>0.052</td></tr>
</table>"#;

impl Record for RankingRecord {
    type Columns = RankingColumns;

    fn from_cells(cells: &Cells<'_>, col: &RankingColumns) -> Result<Self, CellError> {
        Ok(Self {
            rank: cells.rank(col.rank)?,
            team: s!(cells.text(col.team)?),
            adjusted_offense: cells.float(col.adjusted_offense)?,
            adjusted_defense: cells.float(col.adjusted_defense)?,
            tempo: cells.float(col.tempo)?,
            luck: cells.float(col.luck)?,
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.rank.to_string(),
            self.team.clone(),
            fmt_float(self.adjusted_offense),
            fmt_float(self.adjusted_defense),
            fmt_float(self.tempo),
            fmt_float(self.luck),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(v: &[&str]) -> Vec<String> {
        v.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn reads_interleaved_positions() {
        let row = cells(&[
            "1", "Team X", "ACC", "25-3", "101.2", "70.5", "99.1", "8", "68.2", "300", "0.052",
        ]);
        let rec = RankingRecord::from_cells(&Cells::new(&row), &SCHEMA.columns).unwrap();
        assert_eq!(rec, RankingRecord {
            rank: 1,
            team: s!("Team X"),
            adjusted_offense: 101.2,
            adjusted_defense: 99.1,
            tempo: 68.2,
            luck: 0.052,
        });
    }

    #[test]
    fn short_row_that_passes_the_minimum_is_still_dropped() {
        // Two cells satisfy `min_columns` but metric positions are absent.
        let row = cells(&["12", "Team Y"]);
        let err = RankingRecord::from_cells(&Cells::new(&row), &SCHEMA.columns).unwrap_err();
        assert_eq!(err, CellError::Missing(4));
    }

    #[test]
    fn ranking_falls_back_to_nothing() {
        assert!((SCHEMA.fallback)().is_empty());
        assert_eq!(SCHEMA.headers.len(), 6);
    }
}
