use crate::metrics::CollectedMetric;
use core::fmt::Write;

/// Separates the identifier, value, and core fields; every line ends with one.
const FIELD_DELIMITER: char = '|';

/// Render one pipe-delimited line per collected metric, in collection order.
///
/// The core field is empty for system and thread metrics.
pub fn generate<W: Write>(metrics: &[CollectedMetric], writer: &mut W) -> core::fmt::Result {
    for metric in metrics {
        writeln!(
            writer,
            "{id}{d}{value}{d}{core}{d}",
            id = metric.id,
            value = metric.value,
            core = metric.core.as_deref().unwrap_or(""),
            d = FIELD_DELIMITER,
        )?;
    }

    Ok(())
}
