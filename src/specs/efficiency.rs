// src/specs/efficiency.rs
//! BartTorvik T-Rank team efficiency table.
//!
//! `trank.php` serves one big `table#ratings-table`; the first row is the
//! header and every team row carries 15+ cells. Only five are read.

use crate::config::consts::BARTTORVIK_URL;
use crate::config::options::SourceKind;
use crate::core::html::Locator;
use crate::error::CellError;
use crate::scrape::normalize::Cells;

use super::schema::{RowLayout, Schema};
use super::{Record, fmt_float};

#[derive(Clone, Debug, PartialEq)]
pub struct EfficiencyRecord {
    pub team: String,
    pub adjusted_offense: f64,
    pub adjusted_defense: f64,
    pub tempo: f64,
    pub strength_of_schedule: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct EfficiencyColumns {
    pub team: usize,
    pub adjusted_offense: usize,
    pub adjusted_defense: usize,
    pub tempo: usize,
    pub strength_of_schedule: usize,
}

pub static SCHEMA: Schema<EfficiencyRecord> = Schema {
    source: SourceKind::Efficiency,
    url: BARTTORVIK_URL,
    login_url: None,
    locator: Locator::Id { tag: "table", id: "ratings-table" },
    layout: RowLayout::Table,
    min_columns: 5,
    columns: EfficiencyColumns {
        team: 1,
        adjusted_offense: 4,
        adjusted_defense: 5,
        tempo: 7,
        strength_of_schedule: 14,
    },
    headers: &["Team", "AdjO", "AdjD", "Tempo", "SOS"],
    snapshot_stem: "barttorvik",
    fallback: sample_teams,
    fixture: FIXTURE,
};

const FIXTURE: &str = r#"<table id="ratings-table">
<tr><th>Rk</th><th>Team</th><th>Conf</th><th>G</th><th>AdjOE</th><th>AdjDE</th><th>Barthag</th><th>Adj T.</th>
<th>EFG%</th><th>EFGD%</th><th>TOR</th><th>TORD</th><th>ORB</th><th>DRB</th><th>SOS</th></tr>
<tr><td>1</td><td>Houston</td><td>B12</td><td>30</td><td>118.9</td><td>87.1</td><td>.9712</td><td>63.4</td>
<td>51.2</td><td>44.0</td><td>15.1</td><td>23.3</td><td>36.4</td><td>27.0</td><td>11.02</td></tr>
</table>"#;

/// Two illustrative teams so the chart has something to draw offline.
fn sample_teams() -> Vec<EfficiencyRecord> {
    vec![
        EfficiencyRecord {
            team: s!("Sample Team A"),
            adjusted_offense: 110.5,
            adjusted_defense: 98.2,
            tempo: 70.1,
            strength_of_schedule: 1.5,
        },
        EfficiencyRecord {
            team: s!("Sample Team B"),
            adjusted_offense: 108.3,
            adjusted_defense: 100.4,
            tempo: 68.5,
            strength_of_schedule: 2.0,
        },
    ]
}

impl Record for EfficiencyRecord {
    type Columns = EfficiencyColumns;

    fn from_cells(cells: &Cells<'_>, col: &EfficiencyColumns) -> Result<Self, CellError> {
        Ok(Self {
            team: s!(cells.text(col.team)?),
            adjusted_offense: cells.float(col.adjusted_offense)?,
            adjusted_defense: cells.float(col.adjusted_defense)?,
            tempo: cells.float(col.tempo)?,
            strength_of_schedule: cells.float(col.strength_of_schedule)?,
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.team.clone(),
            fmt_float(self.adjusted_offense),
            fmt_float(self.adjusted_defense),
            fmt_float(self.tempo),
            fmt_float(self.strength_of_schedule),
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
    fn reads_fixed_positions() {
        let row = cells(&[
            "7", "Gonzaga", "WCC", "31", "121.3", "95.6", ".91", "70.2",
            "", "", "", "", "", "", "4.8",
        ]);
        let rec = EfficiencyRecord::from_cells(&Cells::new(&row), &SCHEMA.columns).unwrap();
        assert_eq!(rec, EfficiencyRecord {
            team: s!("Gonzaga"),
            adjusted_offense: 121.3,
            adjusted_defense: 95.6,
            tempo: 70.2,
            strength_of_schedule: 4.8,
        });
    }

    #[test]
    fn row_without_sos_column_is_rejected() {
        // Passes the 5-cell minimum but index 14 is out of range.
        let row = cells(&["1", "Houston", "B12", "30", "118.9", "87.1", ".97", "63.4"]);
        let err = EfficiencyRecord::from_cells(&Cells::new(&row), &SCHEMA.columns).unwrap_err();
        assert_eq!(err, CellError::Missing(14));
    }

    #[test]
    fn fallback_is_the_two_sample_teams() {
        let rows: Vec<Vec<String>> = (SCHEMA.fallback)().iter().map(Record::to_row).collect();
        assert_eq!(rows, vec![
            cells(&["Sample Team A", "110.5", "98.2", "70.1", "1.5"]),
            cells(&["Sample Team B", "108.3", "100.4", "68.5", "2.0"]),
        ]);
    }
}
