// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,scrape,snapshot}.

mod copy;     // src/gui/actions/copy.rs
mod scrape;   // src/gui/actions/scrape.rs
mod snapshot; // src/gui/actions/snapshot.rs

pub use copy::copy;
pub use scrape::scrape;
pub use snapshot::snapshot;
