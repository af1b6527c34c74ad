//! Command-line contract and run orchestration.

use super::Host;
use crate::Result;
use crate::config::RunConfig;
use crate::errors::MonitorError;
use crate::poll;
use crate::reports::generate_console;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::io::Write;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

#[derive(Parser, Debug)]
#[command(name = "solr-probe", version, about = "Polls a Solr server's admin endpoints and emits performance metrics")]
struct Cli {
    /// Comma-separated boolean mask selecting which catalog metrics to collect
    metric_state: String,

    /// Solr hostname or IP address
    host: String,

    /// Solr port (8983 when empty)
    port: String,

    /// Solr base path ("solr" when empty)
    path: String,

    /// Username for basic authentication (empty for none)
    username: String,

    /// Password for basic authentication
    password: String,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    log_level: LogLevel,
}

/// Run one probe cycle driven by command-line arguments.
///
/// On success the metric report is written to the host's output stream and the
/// process ends with status 0. On failure a single error line is written to the
/// host's error stream and the host is asked to exit with the class's code.
pub async fn run<H, I, T>(host: &mut H, args: I) -> Result<()>
where
    H: Host,
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(host.output(), "{e}");
            host.exit(0);
            return Ok(());
        }
        Err(_) => return fail(host, MonitorError::ParameterCount),
    };

    init_logging(cli.log_level);

    match execute(&cli).await {
        Ok(report) => {
            let _ = write!(host.output(), "{report}");
            Ok(())
        }
        Err(e) => fail(host, e),
    }
}

/// Build the configuration, run the poll cycle, and render the report.
async fn execute(cli: &Cli) -> Result<String> {
    let config = RunConfig::from_params(&cli.metric_state, &cli.host, &cli.port, &cli.path, &cli.username, &cli.password)?;
    let metrics = poll::poll(&config).await?;

    let mut report = String::new();
    generate_console(&metrics, &mut report).map_err(|e| MonitorError::Other(format!("could not render report: {e}")))?;
    Ok(report)
}

/// Write the single terminal error line and exit with the class's code.
fn fail<H: Host>(host: &mut H, error: MonitorError) -> Result<()> {
    let _ = writeln!(host.error(), "{error}");
    host.exit(error.exit_code());
    Err(error)
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}
