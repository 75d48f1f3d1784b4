//! Tracing subscriber setup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base level (`error`, `warn`, `info`, `debug`, `trace`). Default: `warn`.
    pub level: Option<String>,

    /// `pretty`, `compact` or `json`. Default: `compact`.
    pub format: Option<String>,

    /// Per-module levels, e.g. `cczone = "debug"`.
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
}

impl LoggingConfig {
    /// Filter directive built from the config, with `verbose` forcing debug.
    #[must_use]
    pub fn directive(&self, verbose: bool) -> String {
        let base = if verbose {
            "debug"
        } else {
            self.level.as_deref().unwrap_or("warn")
        };

        let mut directive = base.to_string();
        for (module, level) in &self.filters {
            directive.push(',');
            directive.push_str(module);
            directive.push('=');
            directive.push_str(level);
        }
        directive
    }
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays machine-readable. `RUST_LOG` wins over the config file.
pub fn init(config: &LoggingConfig, verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.directive(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);

    // try_init: a subscriber may already be installed (tests)
    let _ = match config.format.as_deref().unwrap_or("compact") {
        "json" => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        "pretty" => registry
            .with(fmt::layer().pretty().with_ansi(!no_color).with_writer(io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().compact().with_ansi(!no_color).with_writer(io::stderr))
            .try_init(),
    };
}
