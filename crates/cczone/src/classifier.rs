//! Hostname classification.

use std::sync::Arc;
use tracing::debug;

use cczone_client::{CatalogClient, ZoneCatalog};
use cczone_core::{FrontalDomainPattern, OwnedDomains, Platform, Result, Verdict};
use cczone_resolver::{AddressResolver, HickoryResolver, ResolveOptions};

use crate::directory::ZoneDirectory;

/// Decides whether a hostname is served by the platform, and from which zone.
///
/// Rules are applied in order and the first match wins:
///
/// 1. the hostname is under an owned suffix: hosted, zone unknown;
/// 2. its canonical name is `domain.<zone>.<probe-root>`: hosted in `<zone>`;
/// 3. one of its addresses is in the [`ZoneDirectory`]: hosted in that zone
///    (first address in resolver order wins);
/// 4. its canonical name is under an owned suffix: hosted, zone unknown;
/// 5. otherwise not hosted.
pub struct Classifier {
    resolver: Arc<dyn AddressResolver>,
    directory: Arc<ZoneDirectory>,
    owned: OwnedDomains,
    frontal: FrontalDomainPattern,
}

impl Classifier {
    /// Build a classifier sharing an existing directory.
    pub fn new(
        platform: &Platform,
        resolver: Arc<dyn AddressResolver>,
        directory: Arc<ZoneDirectory>,
    ) -> Result<Self> {
        Ok(Self {
            resolver,
            directory,
            owned: platform.owned_domains(),
            frontal: platform.frontal_pattern()?,
        })
    }

    /// Build a classifier and a fresh cold directory from collaborators.
    pub fn with_collaborators(
        platform: Platform,
        catalog: Arc<dyn ZoneCatalog>,
        resolver: Arc<dyn AddressResolver>,
    ) -> Result<Self> {
        let directory = Arc::new(ZoneDirectory::new(
            platform.clone(),
            catalog,
            Arc::clone(&resolver),
        ));
        Self::new(&platform, resolver, directory)
    }

    /// Build a classifier talking to the platform API and the system resolver.
    pub fn for_platform(platform: Platform) -> Result<Self> {
        let catalog = CatalogClient::builder()
            .base_url(platform.api_base.clone())
            .build()?;
        let resolver = HickoryResolver::from_system_conf()?;
        Self::with_collaborators(platform, Arc::new(catalog), Arc::new(resolver))
    }

    /// The zone directory backing address lookups.
    #[must_use]
    pub const fn directory(&self) -> &Arc<ZoneDirectory> {
        &self.directory
    }

    /// Classify `hostname`.
    ///
    /// The hostname must be non-empty. Resolution and catalog failures are
    /// returned as errors; nothing is retried.
    pub async fn check(&self, hostname: &str) -> Result<Verdict> {
        debug!(hostname, "checking whether hostname is hosted on the platform");

        if self.owned.matches(hostname) {
            debug!(hostname, "owned domain");
            return Ok(Verdict::owned());
        }

        let resolution = self
            .resolver
            .resolve(hostname, ResolveOptions::canonical_name())
            .await?;

        let canonical = resolution.canonical_name.as_deref();

        if let Some(zone) = canonical.and_then(|name| self.frontal.zone_of(name)) {
            debug!(hostname, zone = %zone, "frontal canonical name");
            return Ok(Verdict::in_zone(zone));
        }

        for address in &resolution.addresses {
            if let Some(zone) = self.directory.zone_of(*address).await? {
                debug!(hostname, address = %address, zone = %zone, "address in zone directory");
                return Ok(Verdict::in_zone(zone));
            }
        }

        if let Some(name) = canonical.filter(|name| self.owned.matches(name)) {
            // Only reachable through a CNAME into an owned domain that isn't a
            // frontal hostname and whose addresses are unknown.
            debug!(hostname, canonical = name, "owned canonical name");
            return Ok(Verdict::owned());
        }

        Ok(Verdict::not_hosted())
    }
}
