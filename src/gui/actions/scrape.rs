// src/gui/actions/scrape.rs
use crate::{
    config::options::SourceKind,
    gui::{app::App, progress::GuiProgress},
    scrape,
};

pub fn scrape(app: &mut App) {
    let kind = app.current();

    debug_assert_eq!(
        app.state.options.scrape.source, kind,
        "scrape.source drifted from current tab"
    );

    if kind == SourceKind::Ranking && app.credentials.credentials().is_none() {
        logw!("Scrape: no KenPom credentials, fetching anonymously");
    }

    logf!("Scrape: Begin source={:?}", kind);

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the scrape happens ←
    let report = scrape::run_source(kind, &app.fetcher, &app.credentials, Some(&mut prog));

    logf!("Scrape: Done source={:?} fallback={}", kind, report.is_fallback());
    app.store_report(report);
}
