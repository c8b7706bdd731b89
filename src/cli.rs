// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;

use crate::{
    config::{
        consts::{DEFAULT_OUT_DIR, SNAPSHOT_SEP},
        credentials::{CredentialConfig, load_dotenv},
        options::{AppOptions, SourceKind},
    },
    core::HttpFetcher,
    csv,
    error::SnapshotError,
    file,
    log::LogTarget,
    progress::Progress,
    scrape,
    specs,
};

/// Scrape one college basketball source and print it as CSV.
#[derive(Debug, Parser)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// efficiency | ranking | odds | oddsportal
    #[arg(short, long, default_value = "efficiency", value_parser = parse_source)]
    pub source: SourceKind,

    /// Also write `<stem>_<YYYY-MM-DD>.csv` into the output directory
    #[arg(long)]
    pub snapshot: bool,

    /// Snapshot directory
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Validate every built-in schema against its fixture and exit
    #[arg(long)]
    pub check: bool,

    /// Only warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_source(s: &str) -> Result<SourceKind, String> {
    SourceKind::from_slug(s).ok_or_else(|| {
        let known: Vec<&str> = SourceKind::ALL.iter().map(|k| k.slug()).collect();
        format!("unknown source '{s}' (expected one of: {})", known.join(", "))
    })
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut options = AppOptions::default();
        options.scrape.source = self.source;
        options.export.out_dir = self.out_dir.clone();
        options
    }
}

/// Prints pipeline progress to stderr.
struct CliProgress {
    quiet: bool,
}

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        if !self.quiet { eprintln!("{msg}"); }
    }
    fn failed(&mut self, source: SourceKind, reason: &crate::error::ScrapeError) {
        eprintln!("warning: {} unavailable: {reason}", source.title());
    }
    fn finish(&mut self, summary: &str) {
        eprintln!("{summary}");
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();

    let level = if args.quiet { ::log::LevelFilter::Warn } else { ::log::LevelFilter::Info };
    crate::log::init(LogTarget::FileAndTerminal(level));
    load_dotenv();

    specs::validate_all().wrap_err("built-in schema check failed")?;
    if args.check {
        eprintln!("All {} schemas OK", SourceKind::ALL.len());
        return Ok(());
    }

    let options = args.options();
    let source = options.scrape.source;
    let credentials = CredentialConfig::from_env();
    if source == SourceKind::Ranking && credentials.credentials().is_none() {
        logw!("KenPom credentials not set; the ratings table may be hidden");
    }

    let mut progress = CliProgress { quiet: args.quiet };
    let report = scrape::run_source(source, &HttpFetcher::default(), &credentials, Some(&mut progress));
    let data = report.dataset();

    print!("{}", csv::to_string(&data, SNAPSHOT_SEP));

    if args.snapshot {
        match file::save_report_today(&options.export.out_dir, &report) {
            Ok(path) => eprintln!("Saved {} rows to {}", data.row_count(), path.display()),
            Err(e @ SnapshotError::NotLive(_)) => eprintln!("warning: {e}"),
            Err(e) => return Err(e).wrap_err("could not save snapshot"),
        }
    }
    Ok(())
}
