// src/data.rs
//
// RecordSet<R>: typed rows of one source, in table order, plus how many rows
// were thrown away on the way. DataSet: the same thing flattened to strings
// for the table view, the clipboard and snapshots.

/// Ordered, immutable result of one normalization pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordSet<R> {
    records: Vec<R>,
    dropped: usize,
}

impl<R> RecordSet<R> {
    pub fn new(records: Vec<R>, dropped: usize) -> Self {
        Self { records, dropped }
    }

    pub fn empty() -> Self {
        Self { records: Vec::new(), dropped: 0 }
    }

    pub fn records(&self) -> &[R] { &self.records }
    /// Rows skipped for being short or failing coercion (header row excluded).
    pub fn dropped(&self) -> usize { self.dropped }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, R> { self.records.iter() }
}

impl<'a, R> IntoIterator for &'a RecordSet<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}
