//! Run configuration assembled from the six positional parameters.
//!
//! Normalization happens once, here; everything downstream reads the resulting
//! [`RunConfig`] immutably.

use crate::Result;
use crate::errors::MonitorError;

const DEFAULT_PORT: u16 = 8983;
const DEFAULT_BASE_PATH: &str = "solr";

/// Basic-auth credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Immutable configuration for one probe run, shared read-only by all components.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Boolean mask aligned with catalog order; absent positions read as disabled.
    pub enabled: Vec<bool>,
    pub host: String,
    pub port: u16,
    /// Base path with all slashes stripped.
    pub base_path: String,
    pub credentials: Option<Credentials>,
}

impl RunConfig {
    /// Build a normalized configuration from the raw parameter strings.
    pub fn from_params(metric_state: &str, host: &str, port: &str, path: &str, username: &str, password: &str) -> Result<Self> {
        let port = if port.is_empty() {
            DEFAULT_PORT
        } else {
            port.parse().map_err(|_| MonitorError::Other(format!("invalid port '{port}'")))?
        };

        Ok(Self {
            enabled: parse_mask(metric_state),
            host: host.to_owned(),
            port,
            base_path: normalize_base_path(path),
            credentials: normalize_credentials(username, password),
        })
    }

    /// Whether the catalog entry at `index` is selected by the mask.
    #[must_use]
    pub fn metric_enabled(&self, index: usize) -> bool {
        self.enabled.get(index).copied().unwrap_or(false)
    }
}

/// Parse the comma-separated metric mask; `1` enables, anything else disables.
/// Schedulers sometimes quote the whole mask, so double quotes are dropped.
fn parse_mask(metric_state: &str) -> Vec<bool> {
    metric_state.replace('"', "").split(',').map(|token| token == "1").collect()
}

fn normalize_base_path(path: &str) -> String {
    if path.is_empty() {
        DEFAULT_BASE_PATH.to_owned()
    } else {
        path.chars().filter(|c| *c != '/').collect()
    }
}

/// Empty, quote-wrapped empty, and the `{0}` placeholder all mean "no authentication".
fn normalize_credentials(username: &str, password: &str) -> Option<Credentials> {
    let username = normalize_secret(username);
    let password = normalize_secret(password);

    if username.is_empty() || username == "{0}" {
        return None;
    }

    Some(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

fn normalize_secret(raw: &str) -> &str {
    match raw {
        "\"\"" | "\"" => "",
        other => other,
    }
}
