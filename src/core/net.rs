// src/core/net.rs
//
// One blocking GET per scrape, optionally preceded by a login POST on the same
// cookie jar. Only the GET decides the outcome. No retries; the fixed timeout
// is the only cancellation.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{BROWSER_USER_AGENT, REQUEST_TIMEOUT};
use crate::config::credentials::Credentials;
use crate::error::ScrapeError;

/// What the fetch step hands to the table locator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(String),
    NetworkError(String),
    HttpError(u16),
}

impl FetchOutcome {
    pub fn into_markup(self) -> Result<String, ScrapeError> {
        match self {
            FetchOutcome::Success(markup) => Ok(markup),
            FetchOutcome::NetworkError(cause) => Err(ScrapeError::Network(cause)),
            FetchOutcome::HttpError(status) => Err(ScrapeError::Http(status)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchRequest<'a> {
    pub url: &'a str,
    /// Set for sources that sit behind a login form.
    pub login_url: Option<&'a str>,
}

pub trait Fetch {
    fn fetch(&self, request: &FetchRequest<'_>, credentials: Option<&Credentials>) -> FetchOutcome;
}

/// Any closure with the right shape is a fetcher; handy for canned pages.
impl<F> Fetch for F
where
    F: Fn(&FetchRequest<'_>, Option<&Credentials>) -> FetchOutcome,
{
    fn fetch(&self, request: &FetchRequest<'_>, credentials: Option<&Credentials>) -> FetchOutcome {
        self(request, credentials)
    }
}

pub struct HttpFetcher {
    timeout: Duration,
    user_agent: &'static str,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self { timeout: REQUEST_TIMEOUT, user_agent: BROWSER_USER_AGENT }
    }
}

impl HttpFetcher {
    /// Fresh client per call so every scrape owns its own session cookies.
    fn client(&self) -> reqwest::Result<Client> {
        Client::builder()
            .cookie_store(true)
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, request: &FetchRequest<'_>, credentials: Option<&Credentials>) -> FetchOutcome {
        let client = match self.client() {
            Ok(c) => c,
            Err(e) => return FetchOutcome::NetworkError(describe(&e)),
        };

        if let (Some(login_url), Some(creds)) = (request.login_url, credentials) {
            let form = [("email", creds.username()), ("password", creds.password())];
            // Not judged, even on a transport error; the page GET below decides.
            match client.post(login_url).form(&form).send() {
                Ok(resp) => logd!("Net: POST {} → {}", login_url, resp.status()),
                Err(e) => logw!("Net: POST {} failed, fetching anonymously: {}", login_url, describe(&e)),
            }
        }

        logd!("Net: GET {}", request.url);
        let resp = match client.get(request.url).send() {
            Ok(r) => r,
            Err(e) => return FetchOutcome::NetworkError(describe(&e)),
        };

        let status = resp.status();
        if !status.is_success() {
            return FetchOutcome::HttpError(status.as_u16());
        }
        match resp.text() {
            Ok(body) => FetchOutcome::Success(body),
            Err(e) => FetchOutcome::NetworkError(describe(&e)),
        }
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        e.to_string()
    }
}
