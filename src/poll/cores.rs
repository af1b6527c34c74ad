//! Discovery of the cores hosted by the target server.

use super::endpoints::{CORE_STATUS_PATH, resolve_template};
use super::fetcher::Fetcher;
use crate::Result;
use crate::config::RunConfig;
use crate::errors::MonitorError;
use serde_json::Value;
use std::sync::Arc;

const LOG_TARGET: &str = "     cores";

/// Enumerate the cores that must each be polled for mbeans metrics.
///
/// The discovered count fixes the total number of fetches the aggregator waits
/// for. A server with no cores has nothing collectible, which is fatal.
pub async fn discover(fetcher: &Fetcher, config: &RunConfig) -> Result<Vec<Arc<str>>> {
    let doc = fetcher.get_json(&resolve_template(CORE_STATUS_PATH, config, None)).await?;

    let status = doc
        .get("status")
        .and_then(Value::as_object)
        .ok_or_else(|| MonitorError::Other("core status response is missing the 'status' map".to_owned()))?;

    if status.is_empty() {
        return Err(MonitorError::NoCores);
    }

    let cores: Vec<Arc<str>> = status.keys().map(|name| Arc::from(name.as_str())).collect();
    log::debug!(target: LOG_TARGET, "discovered {} core(s)", cores.len());
    Ok(cores)
}
