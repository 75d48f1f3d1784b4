//! DNS resolution backed by hickory.

use async_trait::async_trait;
use hickory_resolver::proto::rr::RData;
use hickory_resolver::TokioResolver;
use std::net::IpAddr;
use std::time::Instant;
use tracing::debug;

use crate::error::{ResolveError, ResolveResult};
use crate::resolver::{AddressResolver, Resolution, ResolveOptions};

/// Resolver using the system's DNS configuration
#[derive(Clone)]
pub struct HickoryResolver {
    resolver: TokioResolver,
}

impl HickoryResolver {
    /// Create a resolver from the system configuration (`/etc/resolv.conf`
    /// or the platform equivalent)
    pub fn from_system_conf() -> ResolveResult<Self> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| ResolveError::Setup(format!("failed to create resolver: {e}")))?
            .build();
        Ok(Self { resolver })
    }
}

#[async_trait]
impl AddressResolver for HickoryResolver {
    async fn resolve(&self, hostname: &str, options: ResolveOptions) -> ResolveResult<Resolution> {
        if let Some(resolution) = literal_resolution(hostname, options) {
            return Ok(resolution);
        }

        let start = Instant::now();
        let lookup = self
            .resolver
            .lookup_ip(hostname)
            .await
            .map_err(|e| ResolveError::Lookup {
                hostname: hostname.to_string(),
                message: e.to_string(),
            })?;

        let addresses: Vec<IpAddr> = lookup.iter().collect();

        let canonical_name = options.wants_canonical_name().then(|| {
            let links: Vec<(String, String)> = lookup
                .as_lookup()
                .records()
                .iter()
                .filter_map(|record| match record.data() {
                    RData::CNAME(target) => Some((record.name().to_utf8(), target.0.to_utf8())),
                    _ => None,
                })
                .collect();
            follow_cname_chain(hostname, &links)
        });

        debug!(
            hostname,
            canonical = canonical_name.as_deref().unwrap_or("-"),
            addresses = addresses.len(),
            elapsed = ?start.elapsed(),
            "resolved"
        );

        Ok(Resolution {
            canonical_name,
            addresses,
        })
    }
}

/// IP literals resolve to themselves without touching the network.
fn literal_resolution(hostname: &str, options: ResolveOptions) -> Option<Resolution> {
    let bare = hostname.trim_start_matches('[').trim_end_matches(']');
    let ip: IpAddr = bare.parse().ok()?;

    let resolution = Resolution::with_addresses([ip]);
    Some(if options.wants_canonical_name() {
        resolution.canonical(bare)
    } else {
        resolution
    })
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Walk `owner -> target` CNAME links starting at `query` and return the
/// last name reached. Without any link the query itself is canonical.
fn follow_cname_chain(query: &str, links: &[(String, String)]) -> String {
    let mut current = normalize(query);

    // A chain can't be longer than the number of links; this also stops loops.
    for _ in 0..links.len() {
        let next = links
            .iter()
            .find(|(owner, _)| normalize(owner) == current)
            .map(|(_, target)| normalize(target));

        match next {
            Some(target) if target != current => current = target,
            _ => break,
        }
    }

    current
}
