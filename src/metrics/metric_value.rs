use core::fmt;
use serde_json::Number;

/// Extracted metric value, carrying its rendering convention.
#[derive(Debug, Clone)]
pub enum MetricValue {
    /// Unit-converted gauge, rendered with exactly two decimal places.
    Scaled(f64),

    /// Count or ratio passed through unconverted.
    Plain(Number),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scaled(value) => write!(f, "{value:.2}"),
            Self::Plain(number) => write!(f, "{number}"),
        }
    }
}
