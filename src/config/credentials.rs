// src/config/credentials.rs
//! Optional login for the authenticated ranking source.
//!
//! The binaries build a [`CredentialConfig`] once at startup and hand it to the
//! pipeline; nothing below `config` reads the process environment on its own.
//! Missing credentials are a valid configuration: the fetch simply goes out
//! anonymously and whatever the site serves to anonymous users is parsed.

use std::fmt;

use super::consts::{ENV_PASSWORD, ENV_USERNAME};

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Both parts must be non-blank, otherwise there is nothing to log in with.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Option<Self> {
        let username = username.into().trim().to_string();
        let password = password.into();
        if username.is_empty() || password.trim().is_empty() {
            return None;
        }
        Some(Self { username, password })
    }

    pub fn username(&self) -> &str { &self.username }
    pub fn password(&self) -> &str { &self.password }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialConfig {
    login: Option<Credentials>,
}

impl CredentialConfig {
    pub fn anonymous() -> Self {
        Self { login: None }
    }

    pub fn with(credentials: Credentials) -> Self {
        Self { login: Some(credentials) }
    }

    /// Read `KENPOM_USERNAME` / `KENPOM_PASSWORD` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over any key → value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let login = match (lookup(ENV_USERNAME), lookup(ENV_PASSWORD)) {
            (Some(user), Some(pass)) => Credentials::new(user, pass),
            _ => None,
        };
        match &login {
            Some(c) => logd!("Credentials: found login for {}", c.username()),
            None => logd!("Credentials: none configured, fetching anonymously"),
        }
        Self { login }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.login.as_ref()
    }
}

/// Load a `.env` file from the working directory into the environment, if there is one.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => logd!("Config: loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => logw!("Config: ignoring unreadable .env ({e})"),
    }
}
