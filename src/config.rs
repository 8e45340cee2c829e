use std::env;
use std::str::FromStr;

use log::LevelFilter;

use crate::seslisozluk::SEARCH_URL;

pub const ENDPOINT_ENV: &str = "SESLI_ENDPOINT";
pub const LOG_ENV: &str = "SESLI_LOG";

/// Runtime settings taken from the environment and the `--debug` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub log_level: LevelFilter,
    pub debug: bool,
}

impl Config {
    pub fn from_env(debug: bool) -> Self {
        Self::from_lookup(debug, |key| env::var(key).ok())
    }

    fn from_lookup(debug: bool, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = lookup(ENDPOINT_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| SEARCH_URL.to_string());
        let mut log_level = lookup(LOG_ENV)
            .and_then(|v| LevelFilter::from_str(&v).ok())
            .unwrap_or(LevelFilter::Warn);
        if debug {
            log_level = log_level.max(LevelFilter::Debug);
        }
        Config {
            endpoint,
            log_level,
            debug,
        }
    }
}
