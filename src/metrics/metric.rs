use super::MetricValue;
use std::sync::Arc;

/// One successfully extracted metric, ready for reporting.
#[derive(Debug, Clone)]
pub struct CollectedMetric {
    pub id: &'static str,
    pub value: MetricValue,

    /// Set only for per-core (mbeans) metrics.
    pub core: Option<Arc<str>>,
}
