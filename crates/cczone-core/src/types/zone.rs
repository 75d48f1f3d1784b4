use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment zone identifier (e.g. `par`, `rbx`, `mtl`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zone(String);

impl Zone {
    /// Create a zone from its name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Zone name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Zone {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Zone {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Zone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Zone entry from the `/v2/products/zones` catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecord {
    /// Zone name, used to build the probe hostname
    pub name: String,

    /// Catalog identifier
    #[serde(default)]
    pub id: Option<String>,

    /// City hosting the zone
    #[serde(default)]
    pub city: Option<String>,

    /// Country hosting the zone
    #[serde(default)]
    pub country: Option<String>,

    /// Two-letter country code
    #[serde(default)]
    pub country_code: Option<String>,

    /// Human-readable name
    #[serde(default)]
    pub display_name: Option<String>,

    /// Latitude coordinate
    #[serde(default)]
    pub lat: Option<f64>,

    /// Longitude coordinate
    #[serde(default)]
    pub lon: Option<f64>,

    /// Catalog tags (`infra:ovh`, `region:eu`, ...)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ZoneRecord {
    /// Zone identifier for this record
    #[must_use]
    pub fn zone(&self) -> Zone {
        Zone::new(self.name.clone())
    }

    /// Best label for display: display name, then city, then zone name
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.city.as_deref())
            .unwrap_or(&self.name)
    }
}
