//! A one-shot probe that polls a Solr server's admin endpoints and prints metrics.

use solr_probe::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that talks to the real OS streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = run(&mut RealHost, std::env::args()).await;
}
