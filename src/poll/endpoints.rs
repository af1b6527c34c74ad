use crate::config::RunConfig;
use crate::metrics::Category;

/// Core-status endpoint polled before any metric fetch.
pub const CORE_STATUS_PATH: &str = "/{PATH}/admin/cores?action=STATUS&wt=json";

/// Path template for one response category.
#[derive(Debug)]
pub struct RequestPlan {
    pub category: Category,
    template: &'static str,
}

/// One plan per category; the mbeans plan is instantiated once per core.
pub const REQUEST_PLANS: &[RequestPlan] = &[
    RequestPlan {
        category: Category::System,
        template: "/{PATH}/admin/info/system?wt=json&json.nl=map",
    },
    RequestPlan {
        category: Category::Threads,
        template: "/{PATH}/admin/info/threads?wt=json&json.nl=map",
    },
    RequestPlan {
        category: Category::Mbeans,
        template: "/{PATH}/{CORE}/admin/mbeans?stats=true&wt=json&json.nl=map",
    },
];

impl RequestPlan {
    /// Substitute the configured base path and, where applicable, a core name.
    #[must_use]
    pub fn resolve(&self, config: &RunConfig, core: Option<&str>) -> String {
        resolve_template(self.template, config, core)
    }
}

/// Literal placeholder substitution; no escaping.
#[must_use]
pub fn resolve_template(template: &str, config: &RunConfig, core: Option<&str>) -> String {
    let path = template.replace("{PATH}", &config.base_path);
    match core {
        Some(core) => path.replace("{CORE}", core),
        None => path,
    }
}
