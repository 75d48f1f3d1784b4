use serde::{Deserialize, Serialize};
use std::fmt;

use super::Zone;

/// Outcome of classifying a hostname
///
/// `zone` is only ever set when `is_hosted` is true. A hosted verdict without
/// a zone means the hostname belongs to the platform itself and no region
/// could be determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVerdict")]
pub struct Verdict {
    is_hosted: bool,
    zone: Option<Zone>,
}

/// Wire form of a [`Verdict`], checked before conversion.
#[derive(Deserialize)]
struct RawVerdict {
    is_hosted: bool,
    #[serde(default)]
    zone: Option<Zone>,
}

impl TryFrom<RawVerdict> for Verdict {
    type Error = String;

    fn try_from(raw: RawVerdict) -> Result<Self, Self::Error> {
        match (raw.is_hosted, raw.zone) {
            (true, Some(zone)) => Ok(Self::in_zone(zone)),
            (true, None) => Ok(Self::owned()),
            (false, None) => Ok(Self::not_hosted()),
            (false, Some(zone)) => Err(format!("verdict is not hosted but names zone {zone}")),
        }
    }
}

impl Verdict {
    /// Hosted in a known zone
    #[must_use]
    pub const fn in_zone(zone: Zone) -> Self {
        Self {
            is_hosted: true,
            zone: Some(zone),
        }
    }

    /// Owned by the platform, zone unknown
    #[must_use]
    pub const fn owned() -> Self {
        Self {
            is_hosted: true,
            zone: None,
        }
    }

    /// Not hosted on the platform
    #[must_use]
    pub const fn not_hosted() -> Self {
        Self {
            is_hosted: false,
            zone: None,
        }
    }

    /// Whether the hostname is served by the platform
    #[must_use]
    pub const fn is_hosted(&self) -> bool {
        self.is_hosted
    }

    /// Zone serving the hostname, if one was determined
    #[must_use]
    pub const fn zone(&self) -> Option<&Zone> {
        self.zone.as_ref()
    }

    /// Consume the verdict and return its zone
    #[must_use]
    pub fn into_zone(self) -> Option<Zone> {
        self.zone
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.zone, self.is_hosted) {
            (Some(zone), _) => write!(f, "hosted (zone {zone})"),
            (None, true) => f.write_str("hosted (zone unknown)"),
            (None, false) => f.write_str("not hosted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_uphold_zone_invariant() {
        let v = Verdict::in_zone(Zone::from("par"));
        assert!(v.is_hosted());
        assert_eq!(v.zone().map(Zone::as_str), Some("par"));

        let v = Verdict::owned();
        assert!(v.is_hosted());
        assert!(v.zone().is_none());

        let v = Verdict::not_hosted();
        assert!(!v.is_hosted());
        assert!(v.zone().is_none());
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(Verdict::in_zone(Zone::from("mtl"))).unwrap();
        assert_eq!(json, serde_json::json!({ "is_hosted": true, "zone": "mtl" }));

        let json = serde_json::to_value(Verdict::not_hosted()).unwrap();
        assert_eq!(json, serde_json::json!({ "is_hosted": false, "zone": null }));
    }

    #[test]
    fn deserialization_enforces_zone_invariant() {
        let v: Verdict = serde_json::from_str(r#"{"is_hosted":true,"zone":"par"}"#).unwrap();
        assert_eq!(v, Verdict::in_zone(Zone::from("par")));

        let v: Verdict = serde_json::from_str(r#"{"is_hosted":true}"#).unwrap();
        assert_eq!(v, Verdict::owned());

        let v: Verdict = serde_json::from_str(r#"{"is_hosted":false,"zone":null}"#).unwrap();
        assert_eq!(v, Verdict::not_hosted());

        let err = serde_json::from_str::<Verdict>(r#"{"is_hosted":false,"zone":"par"}"#).unwrap_err();
        assert!(err.to_string().contains("names zone par"));
    }

    #[test]
    fn display() {
        assert_eq!(Verdict::in_zone(Zone::from("rbx")).to_string(), "hosted (zone rbx)");
        assert_eq!(Verdict::owned().to_string(), "hosted (zone unknown)");
        assert_eq!(Verdict::not_hosted().to_string(), "not hosted");
    }
}
