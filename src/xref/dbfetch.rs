//! Blocking client for the EBI dbfetch service
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::{Database, RecordFetcher};
use crate::{GoError, GoResult};

/// Default dbfetch endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.ebi.ac.uk/Tools/dbfetch/dbfetch";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration of [`DbFetch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbFetchConfig {
    /// URL of the dbfetch endpoint
    pub base_url: String,
    /// Timeout of every request
    pub timeout: Duration,
}

impl Default for DbFetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DbFetchConfig {
    /// Creates the configuration from environment variables
    ///
    /// - `GO_DBFETCH_URL`: URL of the dbfetch endpoint
    /// - `GO_DBFETCH_TIMEOUT_SECS`: request timeout in seconds
    ///
    /// Unset or invalid variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("GO_DBFETCH_URL").filter(|url| !url.is_empty()) {
            config.base_url = url;
        }
        if let Some(secs) = lookup("GO_DBFETCH_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(_) => warn!("Ignoring invalid GO_DBFETCH_TIMEOUT_SECS: {secs}"),
            }
        }
        config
    }
}

/// Fetches raw records from EBI dbfetch
///
/// ```no_run
/// use godag::xref::{cc_pdb_to_go, DbFetch};
///
/// let dbfetch = DbFetch::from_env().unwrap();
/// for go_id in cc_pdb_to_go(&dbfetch, "2a06").unwrap() {
///     println!("{go_id}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DbFetch {
    config: DbFetchConfig,
    http: Client,
}

impl DbFetch {
    /// Creates a new client with the given configuration
    ///
    /// # Errors
    ///
    /// [`GoError::Fetch`] if the HTTP client cannot be initialized
    pub fn new(config: DbFetchConfig) -> GoResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Creates a client configured by environment variables
    ///
    /// See [`DbFetchConfig::from_env`]
    ///
    /// # Errors
    ///
    /// [`GoError::Fetch`] if the HTTP client cannot be initialized
    pub fn from_env() -> GoResult<Self> {
        Self::new(DbFetchConfig::from_env())
    }

    /// The configuration of the client
    pub fn config(&self) -> &DbFetchConfig {
        &self.config
    }
}

impl RecordFetcher for DbFetch {
    fn fetch(&self, db: Database, accession: &str) -> GoResult<String> {
        debug!("Fetching {db}:{accession}");
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&query(db, accession))
            .send()?
            .error_for_status()?;
        check_record(db, accession, response.text()?)
    }
}

fn query(db: Database, accession: &str) -> [(&'static str, String); 4] {
    [
        ("db", db.as_str().to_string()),
        ("id", accession.to_string()),
        ("format", "default".to_string()),
        ("style", "raw".to_string()),
    ]
}

/// dbfetch reports missing entries as plain text with status 200
fn check_record(db: Database, accession: &str, body: String) -> GoResult<String> {
    let trimmed = body.trim_start();
    if trimmed.is_empty() || trimmed.starts_with("ERROR") {
        let reason = trimmed.lines().next().unwrap_or("empty response");
        return Err(GoError::Fetch(format!("{db}:{accession}: {reason}")));
    }
    Ok(body)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_config() {
        let config = DbFetchConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn config_from_variables() {
        let config = DbFetchConfig::from_lookup(|key| match key {
            "GO_DBFETCH_URL" => Some("http://localhost:8080/dbfetch".to_string()),
            "GO_DBFETCH_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://localhost:8080/dbfetch");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_variables_use_defaults() {
        let config = DbFetchConfig::from_lookup(|key| match key {
            "GO_DBFETCH_URL" => Some(String::new()),
            "GO_DBFETCH_TIMEOUT_SECS" => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config, DbFetchConfig::default());
    }

    #[test]
    fn query_parameters() {
        let params = query(Database::UniProtKb, "P31930");
        assert_eq!(params[0], ("db", "uniprotkb".to_string()));
        assert_eq!(params[1], ("id", "P31930".to_string()));
        assert_eq!(params[3], ("style", "raw".to_string()));
    }

    #[test]
    fn error_responses() {
        assert!(check_record(Database::Pdb, "2a06", "HEADER    OXIDOREDUCTASE\n".to_string()).is_ok());
        assert!(matches!(
            check_record(Database::Pdb, "9zzz", "ERROR 12 No entries found.\n".to_string()),
            Err(GoError::Fetch(msg)) if msg == "pdb:9zzz: ERROR 12 No entries found."
        ));
        assert!(check_record(Database::Pdb, "9zzz", "\n".to_string()).is_err());
    }

    #[test]
    fn client_from_config() {
        let dbfetch = DbFetch::new(DbFetchConfig::default()).unwrap();
        assert_eq!(dbfetch.config().base_url, DEFAULT_BASE_URL);
    }
}
