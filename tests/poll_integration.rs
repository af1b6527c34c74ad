//! End-to-end poll-cycle tests against a mock Solr server using wiremock

use serde_json::{Value, json};
use solr_probe::config::RunConfig;
use solr_probe::errors::MonitorError;
use solr_probe::metrics::METRIC_DEFINITIONS;
use solr_probe::poll::poll;
use solr_probe::reports::generate_console;
use wiremock::matchers::{header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn full_mask() -> String {
    vec!["1"; METRIC_DEFINITIONS.len()].join(",")
}

fn config_for(server: &MockServer, mask: &str) -> RunConfig {
    let address = server.address();
    RunConfig::from_params(mask, &address.ip().to_string(), &address.port().to_string(), "solr", "", "").unwrap()
}

fn cores_body(cores: &[&str]) -> Value {
    let mut status = serde_json::Map::new();
    for core in cores {
        let _ = status.insert((*core).to_owned(), json!({ "name": core }));
    }
    json!({ "status": status })
}

fn system_body() -> Value {
    json!({
        "system": {
            "committedVirtualMemorySize": 1_048_576_u64,
            "freePhysicalMemorySize": 2_097_152_u64,
            "processCpuTime": 1_000_000_000_u64,
            "openFileDescriptorCount": 180,
            "maxFileDescriptorCount": 4096,
        },
        "jvm": {
            "processors": 8,
            "jmx": { "upTimeMS": 3_600_000_u64 },
            "memory": {
                "raw": {
                    "free": 52_428_800_u64,
                    "total": 104_857_600_u64,
                    "max": 209_715_200_u64,
                    "used": 52_428_800_u64,
                }
            },
        },
    })
}

fn threads_body() -> Value {
    json!({ "system": { "threadCount": { "current": 42, "peak": 64, "daemon": 30 } } })
}

fn mbeans_body() -> Value {
    json!({
        "solr-mbeans": {
            "CACHE": {
                "documentCache": {
                    "stats": {
                        "lookups": 100, "hits": 75, "hitratio": 0.75,
                        "inserts": 25, "size": 25, "evictions": 0, "warmupTime": 12
                    }
                }
            }
        }
    })
}

async fn mount_cores(server: &MockServer, cores: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/solr/admin/cores"))
        .and(query_param("action", "STATUS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cores_body(cores)))
        .mount(server)
        .await;
}

async fn mount_system(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/solr/admin/info/system"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_threads(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/solr/admin/info/threads"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_mbeans(server: &MockServer, cores: &[&str]) {
    for core in cores {
        Mock::given(method("GET"))
            .and(path(format!("/solr/{core}/admin/mbeans")))
            .and(query_param("stats", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mbeans_body()))
            .mount(server)
            .await;
    }
}

async fn mount_healthy(server: &MockServer, cores: &[&str]) {
    mount_cores(server, cores).await;
    mount_system(server, system_body()).await;
    mount_threads(server, ResponseTemplate::new(200).set_body_json(threads_body())).await;
    mount_mbeans(server, cores).await;
}

#[tokio::test]
async fn test_full_run_collects_every_enabled_metric() {
    let server = MockServer::start().await;
    mount_healthy(&server, &["core0", "core1"]).await;

    let mask = full_mask();
    let config = config_for(&server, &mask);
    let metrics = poll(&config).await.unwrap();

    // 11 system + 3 threads + 7 mbeans per core.
    assert_eq!(metrics.len(), 11 + 3 + 7 * 2);

    let mut report = String::new();
    generate_console(&metrics, &mut report).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), metrics.len());
    assert!(lines.iter().all(|line| line.ends_with('|')));

    assert!(lines.contains(&"2303:Committed Virtual Memory Size:4|1.00||"));
    assert!(lines.contains(&"2308:Uptime:4|1.00||"));
    assert!(lines.contains(&"2314:Thread Count Current:4|42||"));
    assert!(lines.contains(&"2319:Cache Stats Hit Ratio:4|0.75|core0|"));
    assert!(lines.contains(&"2319:Cache Stats Hit Ratio:4|0.75|core1|"));
}

#[tokio::test]
async fn test_per_core_metrics_carry_their_core_and_others_do_not() {
    let server = MockServer::start().await;
    mount_healthy(&server, &["core0"]).await;

    let mask = full_mask();
    let config = config_for(&server, &mask);
    let metrics = poll(&config).await.unwrap();

    for metric in &metrics {
        if metric.id.contains("Cache Stats") {
            assert_eq!(metric.core.as_deref(), Some("core0"), "mbeans metric '{}' lost its core", metric.id);
        } else {
            assert!(metric.core.is_none(), "metric '{}' should not carry a core", metric.id);
        }
    }
}

#[tokio::test]
async fn test_all_zero_mask_yields_no_output_lines() {
    let server = MockServer::start().await;
    mount_healthy(&server, &["core0"]).await;

    let mask = vec!["0"; METRIC_DEFINITIONS.len()].join(",");
    let config = config_for(&server, &mask);
    let metrics = poll(&config).await.unwrap();

    assert!(metrics.is_empty());
}

#[tokio::test]
async fn test_unauthorized_aborts_with_the_authentication_class() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/solr/admin/cores"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let mask = full_mask();
    let config = config_for(&server, &mask);
    let err = poll(&config).await.unwrap_err();

    assert!(matches!(err, MonitorError::Authentication));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_zero_cores_fails_before_any_mbeans_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/solr/admin/cores"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cores_body(&[])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/solr/.+/admin/mbeans$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mbeans_body()))
        .expect(0)
        .mount(&server)
        .await;

    let mask = full_mask();
    let config = config_for(&server, &mask);
    let err = poll(&config).await.unwrap_err();

    assert!(matches!(err, MonitorError::NoCores));
    assert_eq!(err.exit_code(), 8);
}

#[tokio::test]
async fn test_http_error_maps_to_the_status_class() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/solr/admin/cores"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mask = full_mask();
    let config = config_for(&server, &mask);
    let err = poll(&config).await.unwrap_err();

    assert!(matches!(err, MonitorError::HttpStatus { status: 503 }));
    assert_eq!(err.exit_code(), 19);
}

#[tokio::test]
async fn test_malformed_json_is_a_parse_error_not_a_missing_metric() {
    let server = MockServer::start().await;
    mount_cores(&server, &["core0"]).await;
    mount_system(&server, system_body()).await;
    mount_mbeans(&server, &["core0"]).await;

    // Threads answers 200 with a body that is not JSON.
    mount_threads(&server, ResponseTemplate::new(200).set_body_string("{not json")).await;

    let mask = full_mask();
    let config = config_for(&server, &mask);
    let err = poll(&config).await.unwrap_err();

    assert!(matches!(err, MonitorError::MalformedResponse(_)));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_missing_metric_field_aborts_the_run() {
    let server = MockServer::start().await;
    mount_cores(&server, &["core0"]).await;
    mount_threads(&server, ResponseTemplate::new(200).set_body_json(threads_body())).await;
    mount_mbeans(&server, &["core0"]).await;

    let mut body = system_body();
    let _ = body
        .pointer_mut("/system")
        .and_then(Value::as_object_mut)
        .unwrap()
        .remove("processCpuTime");
    mount_system(&server, body).await;

    let mask = full_mask();
    let config = config_for(&server, &mask);
    let err = poll(&config).await.unwrap_err();

    assert!(matches!(
        err,
        MonitorError::MetricNotFound {
            metric: "2305:Process CPU Time:4",
            ..
        }
    ));
    assert_eq!(err.exit_code(), 8);
}

#[tokio::test]
async fn test_basic_auth_header_is_attached_when_credentials_are_set() {
    let server = MockServer::start().await;

    const AUTHORIZATION: &str = "Basic YWRtaW46c2VjcmV0";
    Mock::given(method("GET"))
        .and(path("/solr/admin/cores"))
        .and(header("authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(cores_body(&["core0"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/solr/admin/info/system"))
        .and(header("authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(system_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/solr/admin/info/threads"))
        .and(header("authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(threads_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/solr/core0/admin/mbeans"))
        .and(header("authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(mbeans_body()))
        .mount(&server)
        .await;

    let address = server.address();
    let mask = full_mask();
    let config = RunConfig::from_params(
        &mask,
        &address.ip().to_string(),
        &address.port().to_string(),
        "solr",
        "admin",
        "secret",
    )
    .unwrap();

    let metrics = poll(&config).await.unwrap();
    assert_eq!(metrics.len(), 11 + 3 + 7);
}

/// Host that captures output and the requested exit code in memory.
#[derive(Default)]
struct CaptureHost {
    output: Vec<u8>,
    error: Vec<u8>,
    exit_code: Option<i32>,
}

impl solr_probe::Host for CaptureHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

#[tokio::test]
async fn test_command_line_run_prints_the_report() {
    let server = MockServer::start().await;
    mount_healthy(&server, &["core0"]).await;

    let address = server.address();
    let args = vec![
        "solr-probe".to_owned(),
        full_mask(),
        address.ip().to_string(),
        address.port().to_string(),
        "solr".to_owned(),
        String::new(),
        String::new(),
    ];

    let mut host = CaptureHost::default();
    let result = solr_probe::run(&mut host, args).await;

    assert!(result.is_ok());
    // The success path never asks the host to exit; the process ends with 0.
    assert_eq!(host.exit_code, None);
    assert!(host.error.is_empty());

    let output = String::from_utf8(host.output).unwrap();
    assert_eq!(output.lines().count(), 11 + 3 + 7);
    assert!(output.lines().all(|line| line.ends_with('|')));
}

#[tokio::test]
async fn test_command_line_failure_prints_one_error_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/solr/admin/cores"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let address = server.address();
    let args = vec![
        "solr-probe".to_owned(),
        full_mask(),
        address.ip().to_string(),
        address.port().to_string(),
        "solr".to_owned(),
        "admin".to_owned(),
        "wrong".to_owned(),
    ];

    let mut host = CaptureHost::default();
    let result = solr_probe::run(&mut host, args).await;

    assert!(result.is_err());
    assert_eq!(host.exit_code, Some(2));
    assert!(host.output.is_empty());
    assert_eq!(String::from_utf8(host.error).unwrap(), "invalid authentication\n");
}

#[tokio::test]
async fn test_connection_refused_is_an_unknown_host_error() {
    // Port 1 on loopback has no listener; the connection is refused outright.
    let mask = full_mask();
    let config = RunConfig::from_params(&mask, "127.0.0.1", "1", "solr", "", "").unwrap();

    let err = poll(&config).await.unwrap_err();
    assert!(matches!(err, MonitorError::UnknownHost));
    assert_eq!(err.exit_code(), 28);
}
