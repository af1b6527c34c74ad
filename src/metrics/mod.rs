//! The fixed metric catalog and its extraction model.
//!
//! # Implementation Model
//!
//! The core abstraction is [`MetricDef`], which pairs an opaque identifier with
//! a response [`Category`] and an extractor function. Extractors are pure: they
//! receive the full parsed JSON document for one category and either produce a
//! [`MetricValue`] or fail when the expected field path is absent. This keeps
//! every metric unit-testable without any network dependency.
//!
//! Unit conversions are part of the catalog contract, not incidental: byte
//! gauges become megabytes, CPU time becomes seconds, uptime becomes hours,
//! each rendered with exactly two decimal places. Counts and ratios pass
//! through unconverted.
//!
//! The catalog is a compile-time constant; its order defines the positional
//! metric mask accepted on the command line.

mod metric;
mod metric_category;
mod metric_def;
mod metric_value;

pub use metric::CollectedMetric;
pub use metric_category::Category;
pub use metric_def::{METRIC_DEFINITIONS, MetricDef};
pub use metric_value::MetricValue;
