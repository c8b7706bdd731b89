// src/scrape/normalize.rs
//
// Cell text → typed fields. A row is all or nothing: the first cell that does
// not coerce drops the row, and the drop is only counted.

use crate::data::RecordSet;
use crate::error::CellError;
use crate::specs::Record;

use super::rows::ParsedRows;

/// Positional view over one row's cell texts.
#[derive(Clone, Copy, Debug)]
pub struct Cells<'a>(&'a [String]);

impl<'a> Cells<'a> {
    pub fn new(cells: &'a [String]) -> Self {
        Self(cells)
    }

    /// Trimmed text, possibly empty.
    pub fn raw(&self, index: usize) -> Result<&'a str, CellError> {
        self.0
            .get(index)
            .map(|c| c.trim())
            .ok_or(CellError::Missing(index))
    }

    /// Trimmed, non-empty text.
    pub fn text(&self, index: usize) -> Result<&'a str, CellError> {
        let t = self.raw(index)?;
        if t.is_empty() {
            return Err(CellError::Empty(index));
        }
        Ok(t)
    }

    /// Finite float.
    pub fn float(&self, index: usize) -> Result<f64, CellError> {
        let t = self.text(index)?;
        let v: f64 = t.parse().map_err(|_| CellError::NotNumber { index, text: s!(t) })?;
        if !v.is_finite() {
            return Err(CellError::NotFinite { index, text: s!(t) });
        }
        Ok(v)
    }

    /// Ranking position, 1 or higher.
    pub fn rank(&self, index: usize) -> Result<u32, CellError> {
        let t = self.text(index)?;
        let v: i64 = t.parse().map_err(|_| CellError::NotNumber { index, text: s!(t) })?;
        u32::try_from(v)
            .ok()
            .filter(|r| *r >= 1)
            .ok_or_else(|| CellError::BadRank { index, text: s!(t) })
    }
}

pub fn normalize<R: Record>(parsed: &ParsedRows, columns: &R::Columns) -> RecordSet<R> {
    let mut records = Vec::with_capacity(parsed.rows.len());
    let mut dropped = parsed.skipped;

    for (i, row) in parsed.rows.iter().enumerate() {
        match R::from_cells(&Cells::new(row), columns) {
            Ok(rec) => records.push(rec),
            Err(e) => {
                logd!("Normalize: row {} dropped ({})", i + 1, e);
                dropped += 1;
            }
        }
    }

    RecordSet::new(records, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn float_accepts_signs_and_exponents() {
        let r = row(&["+1.5", " -0.25 ", "1e2"]);
        let c = Cells::new(&r);
        assert_eq!(c.float(0), Ok(1.5));
        assert_eq!(c.float(1), Ok(-0.25));
        assert_eq!(c.float(2), Ok(100.0));
    }

    #[test]
    fn float_rejects_text_blank_and_non_finite() {
        let r = row(&["N/A", "", "inf", "NaN"]);
        let c = Cells::new(&r);
        assert!(matches!(c.float(0), Err(CellError::NotNumber { .. })));
        assert_eq!(c.float(1), Err(CellError::Empty(1)));
        assert!(matches!(c.float(2), Err(CellError::NotFinite { .. })));
        assert!(matches!(c.float(3), Err(CellError::NotFinite { .. })));
        assert_eq!(c.float(9), Err(CellError::Missing(9)));
    }

    #[test]
    fn rank_must_be_positive_integer() {
        let r = row(&["1", "0", "-3", "2.5", " 12 "]);
        let c = Cells::new(&r);
        assert_eq!(c.rank(0), Ok(1));
        assert!(matches!(c.rank(1), Err(CellError::BadRank { .. })));
        assert!(matches!(c.rank(2), Err(CellError::BadRank { .. })));
        assert!(matches!(c.rank(3), Err(CellError::NotNumber { .. })));
        assert_eq!(c.rank(4), Ok(12));
    }

    #[test]
    fn raw_keeps_blank_but_text_does_not() {
        let r = row(&["  "]);
        let c = Cells::new(&r);
        assert_eq!(c.raw(0), Ok(""));
        assert_eq!(c.text(0), Err(CellError::Empty(0)));
    }
}
