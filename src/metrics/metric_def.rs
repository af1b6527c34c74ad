use super::{Category, MetricValue};
use serde_json::Value;

/// A single catalog entry: identifier, response category, and extractor.
///
/// Extractors are pure functions over a parsed response document; `None` means
/// the expected field path is absent, which the aggregator treats as fatal.
#[derive(Debug)]
pub struct MetricDef {
    pub id: &'static str,
    pub category: Category,
    pub extractor: fn(&Value) -> Option<MetricValue>,
}

macro_rules! metric_def {
    ($id:expr, $category:ident, $extractor:expr) => {
        MetricDef {
            id: $id,
            category: Category::$category,
            extractor: $extractor,
        }
    };
}

const BYTES_PER_MEGABYTE: f64 = 1_048_576.0;
const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Byte gauge reported in megabytes.
fn megabytes(doc: &Value, pointer: &str) -> Option<MetricValue> {
    doc.pointer(pointer)?.as_f64().map(|bytes| MetricValue::Scaled(bytes / BYTES_PER_MEGABYTE))
}

/// Nanosecond counter reported in seconds.
fn seconds(doc: &Value, pointer: &str) -> Option<MetricValue> {
    doc.pointer(pointer)?.as_f64().map(|nanos| MetricValue::Scaled(nanos / NANOS_PER_SECOND))
}

/// Millisecond counter reported in hours.
fn hours(doc: &Value, pointer: &str) -> Option<MetricValue> {
    doc.pointer(pointer)?.as_f64().map(|millis| MetricValue::Scaled(millis / MILLIS_PER_HOUR))
}

/// Count or ratio passed through unconverted.
fn plain(doc: &Value, pointer: &str) -> Option<MetricValue> {
    doc.pointer(pointer)?.as_number().cloned().map(MetricValue::Plain)
}

/// The fixed metric catalog, in mask order.
pub const METRIC_DEFINITIONS: &[MetricDef] = &[
    metric_def!("2303:Committed Virtual Memory Size:4", System, |doc| megabytes(doc, "/system/committedVirtualMemorySize")),
    metric_def!("2304:Free Physical Memory Size:4", System, |doc| megabytes(doc, "/system/freePhysicalMemorySize")),
    metric_def!("2305:Process CPU Time:4", System, |doc| seconds(doc, "/system/processCpuTime")),
    metric_def!("2306:Open File Descriptor Count:4", System, |doc| plain(doc, "/system/openFileDescriptorCount")),
    metric_def!("2307:Max File Descriptor Count:4", System, |doc| plain(doc, "/system/maxFileDescriptorCount")),
    metric_def!("2308:Uptime:4", System, |doc| hours(doc, "/jvm/jmx/upTimeMS")),
    metric_def!("2309:Processors:4", System, |doc| plain(doc, "/jvm/processors")),
    metric_def!("2310:Memory Free:4", System, |doc| megabytes(doc, "/jvm/memory/raw/free")),
    metric_def!("2311:Memory Total:4", System, |doc| megabytes(doc, "/jvm/memory/raw/total")),
    metric_def!("2312:Memory Max:4", System, |doc| megabytes(doc, "/jvm/memory/raw/max")),
    metric_def!("2313:Memory Used:4", System, |doc| megabytes(doc, "/jvm/memory/raw/used")),
    metric_def!("2314:Thread Count Current:4", Threads, |doc| plain(doc, "/system/threadCount/current")),
    metric_def!("2315:Thread Count Peak:4", Threads, |doc| plain(doc, "/system/threadCount/peak")),
    metric_def!("2316:Thread Count Daemon:4", Threads, |doc| plain(doc, "/system/threadCount/daemon")),
    metric_def!("2317:Cache Stats Lookups:4", Mbeans, |doc| plain(doc, "/solr-mbeans/CACHE/documentCache/stats/lookups")),
    metric_def!("2318:Cache Stats Hits:4", Mbeans, |doc| plain(doc, "/solr-mbeans/CACHE/documentCache/stats/hits")),
    metric_def!("2319:Cache Stats Hit Ratio:4", Mbeans, |doc| plain(doc, "/solr-mbeans/CACHE/documentCache/stats/hitratio")),
    metric_def!("2320:Cache Stats Inserts:4", Mbeans, |doc| plain(doc, "/solr-mbeans/CACHE/documentCache/stats/inserts")),
    metric_def!("2321:Cache Stats Size:4", Mbeans, |doc| plain(doc, "/solr-mbeans/CACHE/documentCache/stats/size")),
    metric_def!("2322:Cache Stats Evictions:4", Mbeans, |doc| plain(doc, "/solr-mbeans/CACHE/documentCache/stats/evictions")),
    metric_def!("2323:Cache Stats Warmup Time:4", Mbeans, |doc| plain(doc, "/solr-mbeans/CACHE/documentCache/stats/warmupTime")),
];
