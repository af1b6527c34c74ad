//! One poll cycle against the target server.
//!
//! # Implementation Model
//!
//! A cycle starts with core discovery, which fixes the fan-out: two fixed
//! category fetches (system, threads) plus one mbeans fetch per discovered
//! core. All post-discovery fetches are issued concurrently on a single
//! cooperative task and absorbed in completion order; the [`Aggregation`]
//! context tracks collected metrics and the completion count. Any failure
//! anywhere — transport, HTTP status, parse, or a missing metric field —
//! aborts the cycle before anything is reported.

mod collector;
mod cores;
mod endpoints;
mod fetcher;

pub use collector::{Aggregation, FetchResult, poll};
pub use cores::discover;
pub use endpoints::{CORE_STATUS_PATH, REQUEST_PLANS, RequestPlan, resolve_template};
pub use fetcher::Fetcher;
