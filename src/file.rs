// src/file.rs
//
// Snapshot writer: one dated CSV per source, overwritten on every save.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDate};

use crate::config::consts::{SNAPSHOT_EXT, SNAPSHOT_SEP};
use crate::csv::write_dataset;
use crate::data::DataSet;
use crate::error::SnapshotError;
use crate::scrape::SourceReport;

/// `<stem>_<YYYY-MM-DD>.csv`
pub fn snapshot_filename(stem: &str, date: NaiveDate) -> String {
    join!(stem, "_", &date.format("%Y-%m-%d").to_string(), ".", SNAPSHOT_EXT)
}

/// Write `data` as `<dir>/<stem>_<date>.csv`, replacing any file of that name.
/// Returns the path written to.
pub fn write_snapshot(
    dir: &Path,
    stem: &str,
    date: NaiveDate,
    data: &DataSet,
) -> Result<PathBuf, SnapshotError> {
    if !dir.as_os_str().is_empty() {
        ensure_directory(dir)?;
    }
    let path = dir.join(snapshot_filename(stem, date));

    let write = |path: &Path| -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?); // truncate/overwrite
        write_dataset(&mut out, data, SNAPSHOT_SEP)?;
        out.flush()
    };
    write(&path).map_err(|source| SnapshotError::Write { path: path.clone(), source })?;

    logf!("Snapshot: wrote {} rows → {}", data.row_count(), path.display());
    Ok(path)
}

/// Snapshot a scrape under its source's stem. Only live data is written;
/// default rows never replace a real file of the same day.
pub fn save_report(dir: &Path, report: &SourceReport, date: NaiveDate) -> Result<PathBuf, SnapshotError> {
    if report.is_fallback() {
        logw!("Snapshot: {:?} is on fallback data, not writing", report.source());
        return Err(SnapshotError::NotLive(report.source()));
    }
    write_snapshot(dir, report.snapshot_stem(), date, &report.dataset())
}

/// [`save_report`] stamped with today's local date.
pub fn save_report_today(dir: &Path, report: &SourceReport) -> Result<PathBuf, SnapshotError> {
    save_report(dir, report, Local::now().date_naive())
}

pub fn ensure_directory(dir: &Path) -> Result<(), SnapshotError> {
    if dir.exists() && !dir.is_dir() {
        return Err(SnapshotError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|source| SnapshotError::Directory { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}
