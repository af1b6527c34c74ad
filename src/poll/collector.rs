//! Concurrent fetch scheduling and metric aggregation for one poll cycle.

use super::cores;
use super::endpoints::REQUEST_PLANS;
use super::fetcher::Fetcher;
use crate::Result;
use crate::config::RunConfig;
use crate::errors::MonitorError;
use crate::metrics::{METRIC_DEFINITIONS, Category, CollectedMetric};
use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use serde_json::Value;
use std::sync::Arc;

const LOG_TARGET: &str = " collector";

/// Parsed response for one completed fetch.
#[derive(Debug)]
pub struct FetchResult {
    pub category: Category,

    /// Set only for mbeans fetches.
    pub core: Option<Arc<str>>,
    pub doc: Value,
}

/// Accumulation context for one poll cycle.
///
/// Append-only: metrics land in fetch-completion order, catalog order within a
/// single fetch. The cycle is complete exactly when the completion count
/// reaches the number of issued fetches, regardless of arrival order.
#[derive(Debug)]
pub struct Aggregation<'a> {
    config: &'a RunConfig,
    expected: usize,
    completed: usize,
    collected: Vec<CollectedMetric>,
}

impl<'a> Aggregation<'a> {
    #[must_use]
    pub const fn new(config: &'a RunConfig, expected: usize) -> Self {
        Self {
            config,
            expected,
            completed: 0,
            collected: Vec::new(),
        }
    }

    /// Match one completed fetch against the catalog and absorb its metrics.
    ///
    /// Masked-off and category-mismatched entries are skipped; an enabled entry
    /// whose field path is absent aborts the run.
    pub fn absorb(&mut self, result: &FetchResult) -> Result<()> {
        for (index, def) in METRIC_DEFINITIONS.iter().enumerate() {
            if !self.config.metric_enabled(index) || def.category != result.category {
                continue;
            }

            let value = (def.extractor)(&result.doc).ok_or(MonitorError::MetricNotFound {
                metric: def.id,
                category: def.category,
            })?;

            self.collected.push(CollectedMetric {
                id: def.id,
                value,
                core: result.core.clone(),
            });
        }

        self.completed += 1;
        Ok(())
    }

    /// Whether every expected fetch has been absorbed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed == self.expected
    }

    #[must_use]
    pub fn into_metrics(self) -> Vec<CollectedMetric> {
        self.collected
    }
}

/// Run one full poll cycle: discover cores, fetch every category concurrently,
/// and aggregate the enabled metrics.
pub async fn poll(config: &RunConfig) -> Result<Vec<CollectedMetric>> {
    let fetcher = Fetcher::new(config)?;
    let cores = cores::discover(&fetcher, config).await?;

    // One (category, path, core) target per fetch: the fixed categories first,
    // then mbeans once per discovered core.
    let mut targets = Vec::with_capacity(2 + cores.len());
    for plan in REQUEST_PLANS {
        match plan.category {
            Category::Mbeans => {
                for core in &cores {
                    targets.push((plan.category, plan.resolve(config, Some(core)), Some(Arc::clone(core))));
                }
            }
            Category::System | Category::Threads => targets.push((plan.category, plan.resolve(config, None), None)),
        }
    }

    let mut aggregation = Aggregation::new(config, targets.len());
    let mut in_flight: FuturesUnordered<_> = targets
        .into_iter()
        .map(|(category, path, core)| {
            let fetcher = &fetcher;
            async move {
                let doc = fetcher.get_json(&path).await?;
                Ok::<_, MonitorError>(FetchResult { category, core, doc })
            }
        })
        .collect();

    // Absorb responses as they complete; the first failure drops the set and
    // cancels everything still in flight.
    while !aggregation.is_complete() {
        let result = in_flight
            .next()
            .await
            .ok_or_else(|| MonitorError::Other("fetch stream ended before every response was absorbed".to_owned()))??;
        aggregation.absorb(&result)?;
    }

    let metrics = aggregation.into_metrics();
    log::debug!(target: LOG_TARGET, "collected {} metric(s)", metrics.len());
    Ok(metrics)
}
