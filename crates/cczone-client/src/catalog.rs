//! Zone catalog abstraction.

use async_trait::async_trait;
use cczone_core::{Result, ZoneRecord};

use crate::api::ZonesApi;
use crate::CatalogClient;

/// Source of the platform's deployment zones
#[async_trait]
pub trait ZoneCatalog: Send + Sync {
    /// Fetch every zone currently offered by the platform
    async fn zones(&self) -> Result<Vec<ZoneRecord>>;
}

#[async_trait]
impl ZoneCatalog for CatalogClient {
    async fn zones(&self) -> Result<Vec<ZoneRecord>> {
        ZonesApi::new(self).list().await
    }
}
