// src/core/mod.rs

pub mod html;
pub mod net;

pub use net::{Fetch, FetchOutcome, FetchRequest, HttpFetcher};
