// src/scrape/fallback.rs
//
// What consumers get when a page can't be fetched or read: the schema's own
// default rows, never an absent result.

use crate::config::options::SourceKind;
use crate::data::{DataSet, RecordSet};
use crate::specs::{self, Record, Schema};

use super::pipeline::to_dataset;

pub fn default_dataset<R: Record>(schema: &Schema<R>) -> RecordSet<R> {
    RecordSet::new((schema.fallback)(), 0)
}

/// Same, flattened for display, picked by source.
pub fn default_table(kind: SourceKind) -> DataSet {
    match kind {
        SourceKind::Efficiency => flat(&specs::efficiency::SCHEMA),
        SourceKind::Ranking    => flat(&specs::ranking::SCHEMA),
        SourceKind::Odds       => flat(&specs::odds::SCHEMA),
        SourceKind::OddsPortal => flat(&specs::odds::PORTAL_SCHEMA),
    }
}

fn flat<R: Record>(schema: &Schema<R>) -> DataSet {
    to_dataset(schema, &default_dataset(schema))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_source_has_headers_even_when_empty() {
        for kind in SourceKind::ALL {
            let ds = default_table(kind);
            assert!(!ds.headers.is_empty(), "{kind:?}");
            assert!(ds.rows.iter().all(|r| r.len() == ds.headers.len()));
        }
        assert_eq!(default_table(SourceKind::Efficiency).row_count(), 2);
        assert_eq!(default_table(SourceKind::Odds).row_count(), 0);
    }
}
