//! In-memory collaborators for tests.

use async_trait::async_trait;
use cczone_client::ZoneCatalog;
use cczone_core::{Result, ZoneCheckError, ZoneRecord};
use cczone_resolver::{AddressResolver, Resolution, ResolveError, ResolveOptions, ResolveResult};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

/// Resolver answering from a fixed table and recording every query.
#[derive(Default)]
pub struct FakeResolver {
    answers: HashMap<String, Resolution>,
    queries: Mutex<Vec<(String, ResolveOptions)>>,
}

impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `hostname` with the given canonical name and addresses.
    pub fn with_host(mut self, hostname: &str, canonical: Option<&str>, addresses: &[&str]) -> Self {
        let mut resolution = Resolution::with_addresses(addresses.iter().map(|a| ip(a)));
        if let Some(name) = canonical {
            resolution = resolution.canonical(name);
        }
        self.answers.insert(hostname.to_string(), resolution);
        self
    }

    /// Answer the probe hostname of `zone` on the default platform.
    pub fn with_probe(self, zone: &str, addresses: &[&str]) -> Self {
        let host = format!("domain.{zone}.clever-cloud.com");
        self.with_host(&host, None, addresses)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|(host, _)| host.clone())
            .collect()
    }

    pub fn options_for(&self, hostname: &str) -> Option<ResolveOptions> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .find(|(host, _)| host == hostname)
            .map(|(_, options)| *options)
    }
}

#[async_trait]
impl AddressResolver for FakeResolver {
    async fn resolve(&self, hostname: &str, options: ResolveOptions) -> ResolveResult<Resolution> {
        self.queries
            .lock()
            .unwrap()
            .push((hostname.to_string(), options));

        let answer = self.answers.get(hostname).ok_or_else(|| ResolveError::Lookup {
            hostname: hostname.to_string(),
            message: "no record found".into(),
        })?;

        let mut resolution = answer.clone();
        if !options.wants_canonical_name() {
            resolution.canonical_name = None;
        }
        Ok(resolution)
    }
}

/// Catalog serving a fixed zone list, optionally failing or slow.
pub struct FakeCatalog {
    zones: Mutex<Vec<String>>,
    fail: bool,
    delay: Option<Duration>,
    fetches: AtomicUsize,
}

impl FakeCatalog {
    pub fn new(zones: &[&str]) -> Self {
        Self {
            zones: Mutex::new(zones.iter().map(|z| (*z).to_string()).collect()),
            fail: false,
            delay: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(&[])
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_zones(&self, zones: &[&str]) {
        *self.zones.lock().unwrap() = zones.iter().map(|z| (*z).to_string()).collect();
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneCatalog for FakeCatalog {
    async fn zones(&self) -> Result<Vec<ZoneRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            return Err(ZoneCheckError::Api {
                code: 500,
                message: "catalog unavailable".into(),
            });
        }

        let names = self.zones.lock().unwrap().clone();
        Ok(names
            .into_iter()
            .map(|name| serde_json::from_value(serde_json::json!({ "name": name })).unwrap())
            .collect())
    }
}
