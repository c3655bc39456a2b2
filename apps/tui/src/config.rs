use crate::loader::SiteSource;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Relative path the directory data is read from unless overridden.
pub const DEFAULT_SOURCE: &str = "Sites.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: SiteSource,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SiteSource::parse(DEFAULT_SOURCE),
            log_file: None,
            debug: false,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and reads `SITES_SOURCE`, `SITES_LOG_FILE`
    /// and `DEBUG`.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let source = non_empty("SITES_SOURCE")
            .map_or_else(|| SiteSource::parse(DEFAULT_SOURCE), |value| SiteSource::parse(&value));
        let log_file = non_empty("SITES_LOG_FILE").map(PathBuf::from);
        let debug = non_empty("DEBUG").is_some_and(|value| is_truthy(&value));

        Self {
            source,
            log_file,
            debug,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
