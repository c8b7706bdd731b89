// tests/pipeline.rs
//
// End-to-end scrapes against saved pages. The fetcher is a closure, so
// nothing here touches the network.

use std::cell::Cell;

use cbb_scrape::config::credentials::{CredentialConfig, Credentials};
use cbb_scrape::config::options::SourceKind;
use cbb_scrape::core::{FetchOutcome, FetchRequest};
use cbb_scrape::error::ScrapeError;
use cbb_scrape::scrape::{self, SourceReport, Status};
use cbb_scrape::specs::{efficiency, odds, ranking};

const BARTTORVIK: &str = include_str!("fixtures/barttorvik.html");
const KENPOM: &str = include_str!("fixtures/kenpom.html");
const LOGIN_WALL: &str = include_str!("fixtures/login_wall.html");
const VEGASINSIDER: &str = include_str!("fixtures/vegasinsider.html");
const ODDSPORTAL: &str = include_str!("fixtures/oddsportal.html");

fn serve(markup: &'static str) -> impl Fn(&FetchRequest<'_>, Option<&Credentials>) -> FetchOutcome {
    move |_: &FetchRequest<'_>, _: Option<&Credentials>| FetchOutcome::Success(markup.to_string())
}

fn offline() -> impl Fn(&FetchRequest<'_>, Option<&Credentials>) -> FetchOutcome {
    |_: &FetchRequest<'_>, _: Option<&Credentials>| FetchOutcome::NetworkError("connection refused".into())
}

#[test]
fn efficiency_page_parses_and_counts_drops() {
    let report = scrape::run(&efficiency::SCHEMA, &serve(BARTTORVIK), &CredentialConfig::anonymous());
    assert_eq!(report.status, Status::Live);

    let teams: Vec<&str> = report.records.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(teams, ["Houston", "Duke", "Saint Mary's"]);

    let duke = &report.records.records()[1];
    assert_eq!(duke.adjusted_offense, 124.0);
    assert_eq!(duke.adjusted_defense, 90.8);
    assert_eq!(duke.tempo, 66.1);
    assert_eq!(duke.strength_of_schedule, 9.14);

    // divider row (too short) + "N/A" offense
    assert_eq!(report.records.dropped(), 2);
    assert_eq!(report.summary(), "Efficiency (BartTorvik): 3 rows (2 dropped)");
}

#[test]
fn efficiency_network_failure_yields_the_sample_teams() {
    let report = scrape::run(&efficiency::SCHEMA, &offline(), &CredentialConfig::anonymous());

    assert_eq!(report.status, Status::Fallback(ScrapeError::Network("connection refused".into())));
    let got: Vec<(&str, f64, f64, f64, f64)> = report
        .records
        .iter()
        .map(|r| (r.team.as_str(), r.adjusted_offense, r.adjusted_defense, r.tempo, r.strength_of_schedule))
        .collect();
    assert_eq!(
        got,
        [
            ("Sample Team A", 110.5, 98.2, 70.1, 1.5),
            ("Sample Team B", 108.3, 100.4, 68.5, 2.0),
        ]
    );
}

#[test]
fn odds_network_failure_is_empty_but_shaped() {
    let report = scrape::run_source(SourceKind::Odds, &offline(), &CredentialConfig::anonymous(), None);
    assert!(report.is_fallback());

    let ds = report.dataset();
    assert!(ds.rows.is_empty());
    assert_eq!(
        ds.headers,
        ["Team A", "Team B", "Spread", "Over/Under", "Moneyline A", "Moneyline B"]
    );
}

#[test]
fn page_without_the_table_falls_back_like_a_network_error() {
    let report = scrape::run(&efficiency::SCHEMA, &serve(LOGIN_WALL), &CredentialConfig::anonymous());
    assert_eq!(report.status, Status::Fallback(ScrapeError::NotFound("table#ratings-table".into())));
    assert_eq!(report.records.len(), 2);

    let offline = scrape::run(&efficiency::SCHEMA, &offline(), &CredentialConfig::anonymous());
    assert_eq!(report.records, offline.records);
}

#[test]
fn http_status_failure_falls_back() {
    let forbidden = |_: &FetchRequest<'_>, _: Option<&Credentials>| FetchOutcome::HttpError(403);
    let report = scrape::run(&ranking::SCHEMA, &forbidden, &CredentialConfig::anonymous());
    assert_eq!(report.status, Status::Fallback(ScrapeError::Http(403)));
    assert!(report.records.is_empty());
}

#[test]
fn ranking_reads_every_other_metric_column() {
    let report = scrape::run(&ranking::SCHEMA, &serve(KENPOM), &CredentialConfig::anonymous());
    assert_eq!(report.status, Status::Live);
    assert_eq!(report.records.len(), 2);

    let x = &report.records.records()[0];
    assert_eq!(x.rank, 1);
    assert_eq!(x.team, "Team X");
    assert_eq!(x.adjusted_offense, 101.2);
    assert_eq!(x.adjusted_defense, 99.1);
    assert_eq!(x.tempo, 68.2);
    assert_eq!(x.luck, 0.052);

    assert_eq!(report.records.records()[1].luck, -0.013);
    // rank 0 + a two-cell row
    assert_eq!(report.records.dropped(), 2);
}

#[test]
fn credentials_travel_with_the_ranking_request_only() {
    let logins = Cell::new(0);
    let fetcher = |req: &FetchRequest<'_>, creds: Option<&Credentials>| {
        if let Some(c) = creds {
            assert_eq!(req.login_url, Some("https://kenpom.com/login.php"));
            assert_eq!(c.username(), "coach@example.com");
            logins.set(logins.get() + 1);
        }
        let page = if req.url.contains("kenpom") { KENPOM } else { BARTTORVIK };
        FetchOutcome::Success(page.to_string())
    };
    let creds = CredentialConfig::with(Credentials::new("coach@example.com", "hunter2").unwrap());

    let ranked = scrape::run(&ranking::SCHEMA, &fetcher, &creds);
    let rated = scrape::run(&efficiency::SCHEMA, &fetcher, &creds);

    assert!(!ranked.is_fallback() && !rated.is_fallback());
    assert_eq!(logins.get(), 1);
}

#[test]
fn rejected_login_surfaces_as_missing_table() {
    let creds = CredentialConfig::with(Credentials::new("coach@example.com", "wrong").unwrap());
    let report = scrape::run(&ranking::SCHEMA, &serve(LOGIN_WALL), &creds);
    assert_eq!(report.status, Status::Fallback(ScrapeError::NotFound("table#ratings-table".into())));
    assert!(report.records.is_empty());
}

#[test]
fn vegasinsider_keeps_blank_lines_as_text() {
    let report = scrape::run(&odds::SCHEMA, &serve(VEGASINSIDER), &CredentialConfig::anonymous());
    assert_eq!(report.records.len(), 3);
    assert_eq!(report.records.dropped(), 1);

    let kansas = &report.records.records()[1];
    assert_eq!((kansas.spread.as_str(), kansas.over_under.as_str()), ("PK", "o139½"));
    assert_eq!(kansas.moneyline_a, "EVEN");

    let gonzaga = &report.records.records()[2];
    assert_eq!(gonzaga.team_b, "Saint Mary's");
    assert_eq!(gonzaga.spread, "");
}

#[test]
fn oddsportal_event_rows_take_two_teams_and_four_prices() {
    let report = scrape::run_source(SourceKind::OddsPortal, &serve(ODDSPORTAL), &CredentialConfig::anonymous(), None);
    let SourceReport::Odds(r) = &report else { panic!("expected odds report, got {report:?}") };

    assert_eq!(r.source, SourceKind::OddsPortal);
    assert_eq!(r.records.len(), 2);
    assert_eq!(r.records.dropped(), 1);
    assert_eq!(
        report.dataset().rows[1],
        ["Kansas", "Baylor", "1.0", "139.5", "1.91", "1.91"]
    );
    assert_eq!(report.snapshot_stem(), "oddsportal_odds");
}

#[test]
fn same_markup_same_result() {
    let a = scrape::run(&efficiency::SCHEMA, &serve(BARTTORVIK), &CredentialConfig::anonymous());
    let b = scrape::run(&efficiency::SCHEMA, &serve(BARTTORVIK), &CredentialConfig::anonymous());
    assert_eq!(a, b);
}
