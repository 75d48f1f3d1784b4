//! Resolver abstraction.

use async_trait::async_trait;
use std::net::IpAddr;

use crate::error::ResolveResult;

/// What a lookup should return besides addresses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    canonical_name: bool,
}

impl ResolveOptions {
    /// Addresses only
    #[must_use]
    pub const fn addresses() -> Self {
        Self {
            canonical_name: false,
        }
    }

    /// Addresses plus the canonical name at the end of the CNAME chain
    #[must_use]
    pub const fn canonical_name() -> Self {
        Self {
            canonical_name: true,
        }
    }

    /// Whether the canonical name was requested
    #[must_use]
    pub const fn wants_canonical_name(&self) -> bool {
        self.canonical_name
    }
}

/// Answer to a hostname lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Canonical name, only filled when requested
    pub canonical_name: Option<String>,
    /// Addresses in the order the resolver returned them
    pub addresses: Vec<IpAddr>,
}

impl Resolution {
    /// Resolution with addresses only
    #[must_use]
    pub fn with_addresses(addresses: impl IntoIterator<Item = IpAddr>) -> Self {
        Self {
            canonical_name: None,
            addresses: addresses.into_iter().collect(),
        }
    }

    /// Attach a canonical name
    #[must_use]
    pub fn canonical(mut self, name: impl Into<String>) -> Self {
        self.canonical_name = Some(name.into());
        self
    }
}

/// Resolves hostnames to a canonical name and network addresses
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Resolve `hostname`
    async fn resolve(&self, hostname: &str, options: ResolveOptions) -> ResolveResult<Resolution>;
}
