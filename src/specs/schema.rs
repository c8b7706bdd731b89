// src/specs/schema.rs
//
// Everything that is specific to one page lives in a single `Schema` value:
// where to fetch, how to find the table, which rows/cells to read, which
// positions map to which fields, what to show when the page can't be read,
// and a tiny fixture proving the whole mapping still works.

use scraper::Selector;

use crate::config::options::SourceKind;
use crate::core::html::{self, Locator};
use crate::core::net::FetchRequest;
use crate::error::SchemaError;

use super::Record;

/// How rows and cells are laid out inside the located element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowLayout {
    /// `<tr>` rows (first one is the header) with `<td>` cells.
    Table,
    /// Arbitrary row elements; each group contributes its first `take` matches
    /// and a row missing any of them is skipped. No header row.
    Blocks { row: &'static str, groups: &'static [CellGroup] },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGroup {
    pub css: &'static str,
    pub take: usize,
}

pub struct Schema<R: Record> {
    pub source: SourceKind,
    pub url: &'static str,
    pub login_url: Option<&'static str>,
    pub locator: Locator,
    pub layout: RowLayout,
    /// Rows with fewer cells are discarded before normalization.
    pub min_columns: usize,
    pub columns: R::Columns,
    pub headers: &'static [&'static str],
    pub snapshot_stem: &'static str,
    pub fallback: fn() -> Vec<R>,
    /// Smallest page the schema must be able to read.
    pub fixture: &'static str,
}

pub enum CellPick {
    All(Selector),
    Groups(Vec<(Selector, usize)>),
}

/// Selectors of a schema, parsed once per scrape.
pub struct Compiled {
    pub scope: Option<Selector>,
    pub rows: Selector,
    pub cells: CellPick,
    pub skip_header: bool,
}

impl<R: Record> Schema<R> {
    pub fn request(&self) -> FetchRequest<'static> {
        FetchRequest { url: self.url, login_url: self.login_url }
    }

    pub fn headers(&self) -> Vec<String> {
        headers!(self.headers)
    }

    pub fn compile(&self) -> Result<Compiled, SchemaError> {
        let scope = self.locator.css().map(|css| html::selector(&css)).transpose()?;
        let compiled = match self.layout {
            RowLayout::Table => Compiled {
                scope,
                rows: html::selector("tr")?,
                cells: CellPick::All(html::selector("td")?),
                skip_header: true,
            },
            RowLayout::Blocks { row, groups } => {
                let groups = groups
                    .iter()
                    .map(|g| Ok((html::selector(g.css)?, g.take)))
                    .collect::<Result<Vec<_>, SchemaError>>()?;
                Compiled {
                    scope,
                    rows: html::selector(row)?,
                    cells: CellPick::Groups(groups),
                    skip_header: false,
                }
            }
        };
        Ok(compiled)
    }
}
