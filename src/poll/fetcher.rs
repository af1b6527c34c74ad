//! HTTP access to the target server's admin API.

use crate::Result;
use crate::config::RunConfig;
use crate::errors::MonitorError;
use core::time::Duration;
use reqwest::{Client, StatusCode};
use serde_json::Value;

const LOG_TARGET: &str = "   fetcher";

/// Upper bound on any single request; expiry is a transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues GET requests against the target host, attaching credentials when configured.
///
/// No retries: the first failure of any kind aborts the whole run, and the
/// scheduler is expected to retry the invocation on its own cadence.
#[derive(Debug)]
pub struct Fetcher {
    client: Client,
    config: RunConfig,
}

impl Fetcher {
    pub fn new(config: &RunConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("solr-probe/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(MonitorError::Transport)?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// GET `path` on the configured host and parse the body as JSON.
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("http://{}:{}{}", self.config.host, self.config.port, path);
        log::debug!(target: LOG_TARGET, "GET {url}");

        let mut request = self.client.get(&url);
        if let Some(credentials) = &self.config.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = request.send().await.map_err(classify_transport)?;
        match response.status() {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => return Err(MonitorError::Authentication),
            status => {
                return Err(MonitorError::HttpStatus {
                    status: status.as_u16(),
                });
            }
        }

        let body = response.text().await.map_err(classify_transport)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Connection-level failures get their own exit class; everything else is generic transport.
fn classify_transport(err: reqwest::Error) -> MonitorError {
    if err.is_connect() {
        MonitorError::UnknownHost
    } else {
        MonitorError::Transport(err)
    }
}
