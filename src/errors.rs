//! Error taxonomy for a probe run.
//!
//! Every failure is terminal: there is no retry and no partial output. The run
//! prints a single error line and exits with the code carried by the variant,
//! so the scheduling pipeline can distinguish failure classes without parsing
//! the message.

use crate::metrics::Category;

/// Classified failure for a single probe run.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// The command line did not carry the six expected parameters.
    #[error("wrong number of parameters")]
    ParameterCount,

    /// The target host could not be resolved or refused the connection.
    #[error("unknown host")]
    UnknownHost,

    /// The server rejected the configured credentials (HTTP 401).
    #[error("invalid authentication")]
    Authentication,

    /// The server answered with a non-200, non-401 status.
    #[error("response error ({status})")]
    HttpStatus { status: u16 },

    /// An enabled metric's field path was absent from an otherwise valid response.
    ///
    /// Treated as fatally as a network error: a missing field usually means a
    /// server version mismatch the operator must know about.
    #[error("metric '{metric}' not found in {category} response")]
    MetricNotFound { metric: &'static str, category: Category },

    /// Core discovery returned an empty status map; nothing is collectible.
    #[error("no cores found")]
    NoCores,

    /// A response body was not valid JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The request failed in flight, including timeout expiry.
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Anything that does not fit the classes above.
    #[error("{0}")]
    Other(String),
}

impl MonitorError {
    /// Process exit code reported to the monitoring scheduler.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ParameterCount => 3,
            Self::UnknownHost => 28,
            Self::Authentication => 2,
            Self::HttpStatus { .. } => 19,
            Self::MetricNotFound { .. } | Self::NoCores => 8,
            Self::MalformedResponse(_) | Self::Transport(_) | Self::Other(_) => 1,
        }
    }
}
