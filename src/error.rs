// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

use crate::config::options::SourceKind;

/// Why a scrape ended on the fallback dataset. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error: status {0}")]
    Http(u16),

    #[error("table not found (selector `{0}`)")]
    NotFound(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Source configuration that does not hold up: a selector that does not parse,
/// or a built-in fixture that no longer produces a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("invalid selector `{css}`: {reason}")]
    Selector { css: String, reason: String },

    #[error("{kind:?} fixture check failed: {reason}")]
    Fixture { kind: SourceKind, reason: String },
}

/// One row's cells do not fit the schema. Only ever logged; the row is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("column {0} missing")]
    Missing(usize),

    #[error("column {0} is empty")]
    Empty(usize),

    #[error("column {index}: `{text}` is not a number")]
    NotNumber { index: usize, text: String },

    #[error("column {index}: `{text}` is not finite")]
    NotFinite { index: usize, text: String },

    #[error("column {index}: rank `{text}` must be 1 or higher")]
    BadRank { index: usize, text: String },
}

/// Writing a snapshot failed. Surfaced to the user as-is, never retried.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("could not create {}: {source}", .path.display())]
    Directory { path: PathBuf, source: io::Error },

    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{} is showing default data; nothing saved", .0.title())]
    NotLive(SourceKind),
}
