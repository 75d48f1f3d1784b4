//! Educational features: explanations of what each command does.

use colored::Colorize;

/// Command explanation builder.
pub struct Explain {
    description: String,
    api_call: Option<String>,
    what_happens: Vec<String>,
}

impl Explain {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            api_call: None,
            what_happens: Vec::new(),
        }
    }

    fn api(mut self, endpoint: &str) -> Self {
        self.api_call = Some(endpoint.to_string());
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    /// Steps listed so far.
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.what_happens
    }

    /// Print the explanation. Goes to stderr so it never mixes with JSON/CSV output.
    pub fn print(&self) {
        eprintln!();
        eprintln!("{}", "=== What This Does ===".bold().cyan());
        eprintln!("{}", self.description);
        eprintln!();

        if !self.what_happens.is_empty() {
            eprintln!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, step);
            }
            eprintln!();
        }

        if let Some(api) = &self.api_call {
            eprintln!("{} {}", "API Call:".bold(), api.dimmed());
            eprintln!();
        }

        eprintln!("{}", "=== Results ===".bold().cyan());
        eprintln!();
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn check(probe_root: &str) -> Self {
        Self::new("Tells whether each website is served by Clever Cloud, and from which zone.")
            .step("Hostnames under a Clever Cloud domain are hosted (zone unknown) - no DNS query")
            .step(&format!(
                "Otherwise the hostname is resolved; a canonical name domain.<zone>.{probe_root} gives the zone"
            ))
            .step("Otherwise each address is looked up in the frontal address directory")
            .step("A canonical name under a Clever Cloud domain still counts as hosted")
            .step("Anything else is probably not hosted by Clever Cloud")
    }

    pub fn zones() -> Self {
        Self::new("Lists the deployment zones Clever Cloud currently offers.")
            .api("GET /v2/products/zones")
            .step("Public endpoint: no API token needed")
    }

    pub fn directory(probe_root: &str) -> Self {
        Self::new("Builds the map of frontal load-balancer addresses to zones.")
            .api("GET /v2/products/zones")
            .step("Fetches the zone catalog")
            .step(&format!(
                "Resolves domain.<zone>.{probe_root} for every zone, all in parallel"
            ))
            .step("Zones whose probe fails are skipped")
            .step("Every address found is mapped to its zone")
    }

    pub fn watch() -> Self {
        Self::new("Replays browser navigations read from stdin, one `<tab-id> <url>` per line.")
            .step("Each navigation is classified in its own task, like concurrent tabs")
            .step("URLs without a host (about:blank, file://) are ignored")
            .step("Failures are logged and leave the tab untouched")
            .step("The directory is built once, on the first navigation that needs it")
    }
}
