//! Session cache mapping frontal addresses to deployment zones.
//!
//! The directory starts [`DirectoryState::Cold`]. The first lookup on a cold
//! directory fetches the zone catalog, resolves every zone's probe hostname
//! in parallel and installs the resulting address map as a single
//! [`Snapshot`]. The snapshot is then used for the rest of the session; only
//! [`ZoneDirectory::refresh`] or [`ZoneDirectory::clear`] replace it.

use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use cczone_client::ZoneCatalog;
use cczone_core::{Platform, Result, Zone};
use cczone_resolver::{AddressResolver, ResolveOptions};

/// Whether the directory has been populated in this session.
#[derive(Debug, Clone)]
pub enum DirectoryState {
    /// Never refreshed (or cleared).
    Cold,
    /// Populated by a refresh.
    Warm(Arc<Snapshot>),
}

impl DirectoryState {
    /// Returns true once a refresh has completed.
    #[must_use]
    pub const fn is_warm(&self) -> bool {
        matches!(self, Self::Warm(_))
    }
}

/// Immutable address→zone mapping produced by one refresh.
#[derive(Debug, Clone)]
pub struct Snapshot {
    refreshed_at: DateTime<Utc>,
    zones: HashMap<IpAddr, Zone>,
}

impl Snapshot {
    /// Build a snapshot from a complete mapping.
    #[must_use]
    pub const fn new(zones: HashMap<IpAddr, Zone>, refreshed_at: DateTime<Utc>) -> Self {
        Self { refreshed_at, zones }
    }

    /// When this snapshot was built.
    #[must_use]
    pub const fn refreshed_at(&self) -> DateTime<Utc> {
        self.refreshed_at
    }

    /// Zone fronted by `address`, if any.
    #[must_use]
    pub fn zone_of(&self, address: IpAddr) -> Option<&Zone> {
        self.zones.get(&address)
    }

    /// Number of known addresses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true if no address is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// All entries, ordered by address.
    #[must_use]
    pub fn entries(&self) -> Vec<(IpAddr, &Zone)> {
        let mut entries: Vec<_> = self.zones.iter().map(|(ip, zone)| (*ip, zone)).collect();
        entries.sort_by_key(|(ip, _)| *ip);
        entries
    }
}

/// Outcome of a directory refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Zones listed by the catalog
    pub zones: usize,
    /// Distinct addresses in the new snapshot
    pub addresses: usize,
    /// Zones whose probe hostname failed to resolve
    pub failed_probes: usize,
    /// Timestamp recorded on the snapshot
    pub refreshed_at: DateTime<Utc>,
}

/// Address→zone cache refreshed from the zone catalog.
pub struct ZoneDirectory {
    platform: Platform,
    catalog: Arc<dyn ZoneCatalog>,
    resolver: Arc<dyn AddressResolver>,
    state: RwLock<DirectoryState>,
    // Serializes refreshes so concurrent cold lookups share one.
    refresh_gate: Mutex<()>,
}

impl ZoneDirectory {
    /// Create a cold directory.
    pub fn new(
        platform: Platform,
        catalog: Arc<dyn ZoneCatalog>,
        resolver: Arc<dyn AddressResolver>,
    ) -> Self {
        Self {
            platform,
            catalog,
            resolver,
            state: RwLock::new(DirectoryState::Cold),
            refresh_gate: Mutex::new(()),
        }
    }

    /// Current state.
    pub async fn state(&self) -> DirectoryState {
        self.state.read().await.clone()
    }

    /// Current snapshot, if the directory is warm.
    pub async fn snapshot(&self) -> Option<Arc<Snapshot>> {
        match &*self.state.read().await {
            DirectoryState::Warm(snapshot) => Some(Arc::clone(snapshot)),
            DirectoryState::Cold => None,
        }
    }

    /// Zone fronted by `address`.
    ///
    /// A cold directory is refreshed first; a warm one answers from its
    /// snapshot without any staleness check.
    pub async fn zone_of(&self, address: IpAddr) -> Result<Option<Zone>> {
        let snapshot = match self.snapshot().await {
            Some(snapshot) => snapshot,
            None => self.warm_up().await?,
        };

        Ok(snapshot.zone_of(address).cloned())
    }

    /// Rebuild the snapshot from the catalog, replacing the current one.
    pub async fn refresh(&self) -> Result<RefreshSummary> {
        let _gate = self.refresh_gate.lock().await;
        let (_, summary) = self.rebuild().await?;
        Ok(summary)
    }

    /// Drop the snapshot; the next lookup refreshes again.
    ///
    /// Waits for a refresh in flight so its snapshot cannot be installed
    /// after the clear.
    pub async fn clear(&self) {
        let _gate = self.refresh_gate.lock().await;
        *self.state.write().await = DirectoryState::Cold;
        debug!("zone directory cleared");
    }

    async fn warm_up(&self) -> Result<Arc<Snapshot>> {
        let _gate = self.refresh_gate.lock().await;

        // Another lookup may have refreshed while we waited for the gate.
        if let Some(snapshot) = self.snapshot().await {
            debug!("zone directory warmed by a concurrent refresh");
            return Ok(snapshot);
        }

        info!("Caching frontal addresses...");
        let (snapshot, _) = self.rebuild().await?;
        Ok(snapshot)
    }

    /// Caller must hold `refresh_gate`.
    async fn rebuild(&self) -> Result<(Arc<Snapshot>, RefreshSummary)> {
        let records = self.catalog.zones().await?;

        let probes = records.iter().map(|record| {
            let zone = record.zone();
            let hostname = self.platform.probe_hostname(&zone);
            async move {
                let result = self
                    .resolver
                    .resolve(&hostname, ResolveOptions::addresses())
                    .await;
                (zone, hostname, result)
            }
        });
        let outcomes = join_all(probes).await;

        let mut zones = HashMap::new();
        let mut pairs = 0usize;
        let mut failed_probes = 0usize;

        for (zone, hostname, result) in outcomes {
            match result {
                Ok(resolution) => {
                    for address in resolution.addresses {
                        pairs += 1;
                        // On duplicates the zone listed later in the catalog wins,
                        // not the first one seen.
                        zones.insert(address, zone.clone());
                    }
                }
                Err(e) => {
                    failed_probes += 1;
                    warn!(zone = %zone, probe = %hostname, error = %e, "zone probe failed");
                }
            }
        }

        let refreshed_at = Utc::now();
        let summary = RefreshSummary {
            zones: records.len(),
            addresses: zones.len(),
            failed_probes,
            refreshed_at,
        };
        let snapshot = Arc::new(Snapshot::new(zones, refreshed_at));

        *self.state.write().await = DirectoryState::Warm(Arc::clone(&snapshot));

        info!(
            failed_probes,
            "Found {} addresses in {} zones", pairs, summary.zones
        );

        Ok((snapshot, summary))
    }
}
