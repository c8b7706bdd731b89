// src/config/consts.rs
use std::time::Duration;

// Net config
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Sources
pub const BARTTORVIK_URL: &str = "https://barttorvik.com/trank.php";
pub const KENPOM_URL: &str = "https://kenpom.com/";
pub const KENPOM_LOGIN_URL: &str = "https://kenpom.com/login.php";
pub const VEGASINSIDER_URL: &str = "https://www.vegasinsider.com/college-basketball/odds/";
pub const ODDSPORTAL_URL: &str = "https://www.oddsportal.com/basketball/usa/ncaa/";

// Credentials (environment / .env)
pub const ENV_USERNAME: &str = "KENPOM_USERNAME";
pub const ENV_PASSWORD: &str = "KENPOM_PASSWORD";

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const SNAPSHOT_EXT: &str = "csv";
pub const SNAPSHOT_SEP: char = ',';
