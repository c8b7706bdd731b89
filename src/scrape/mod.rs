// src/scrape/mod.rs
pub mod fallback;
pub mod normalize;
pub mod pipeline;
pub mod rows;

pub use pipeline::{run, run_source, ScrapeReport, SourceReport, Status};
