//! Platform description and the hostname patterns derived from it.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoneCheckError};
use crate::types::Zone;

/// Description of the hosting platform being detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Base URL of the platform API serving the zone catalog.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Root domain under which per-zone frontal hostnames live
    /// (`domain.<zone>.<probe_root>`).
    #[serde(default = "default_probe_root")]
    pub probe_root: String,

    /// Domains owned by the platform itself, matched by suffix.
    #[serde(default = "default_owned_suffixes")]
    pub owned_suffixes: Vec<String>,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            probe_root: default_probe_root(),
            owned_suffixes: default_owned_suffixes(),
        }
    }
}

impl Platform {
    /// Hostname whose addresses front the given zone.
    #[must_use]
    pub fn probe_hostname(&self, zone: &Zone) -> String {
        format!("domain.{zone}.{}", self.probe_root)
    }

    /// Suffix rules for platform-owned hostnames.
    #[must_use]
    pub fn owned_domains(&self) -> OwnedDomains {
        OwnedDomains::new(self.owned_suffixes.iter().map(String::as_str))
    }

    /// Pattern matching canonical names of frontal hostnames.
    pub fn frontal_pattern(&self) -> Result<FrontalDomainPattern> {
        FrontalDomainPattern::new(&self.probe_root)
    }
}

fn default_api_base() -> String {
    String::from("https://api.clever-cloud.com")
}

fn default_probe_root() -> String {
    String::from("clever-cloud.com")
}

fn default_owned_suffixes() -> Vec<String> {
    ["clever-cloud.com", "clever-cloud.fr", "cleverapps.io", "clvrcld.net"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Lowercase a hostname and drop the DNS root dot.
fn normalize(hostname: &str) -> String {
    hostname.trim_end_matches('.').to_ascii_lowercase()
}

/// Suffix rules identifying hostnames owned directly by the platform.
///
/// A hostname matches a suffix when it is equal to it or is a subdomain of it,
/// so `clever-cloud.com` matches `www.clever-cloud.com` but not
/// `notclever-cloud.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedDomains {
    suffixes: Vec<String>,
}

impl OwnedDomains {
    /// Build the rule set from suffixes.
    pub fn new<'a>(suffixes: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            suffixes: suffixes
                .into_iter()
                .map(normalize)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Returns true if the hostname falls under any owned suffix.
    #[must_use]
    pub fn matches(&self, hostname: &str) -> bool {
        let host = normalize(hostname);
        self.suffixes.iter().any(|suffix| {
            host == *suffix
                || host
                    .strip_suffix(suffix.as_str())
                    .is_some_and(|head| head.ends_with('.'))
        })
    }

    /// Configured suffixes, normalized.
    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

/// Matches `domain.<zone>.<probe-root>` and captures `<zone>`.
#[derive(Debug, Clone)]
pub struct FrontalDomainPattern {
    regex: Regex,
}

impl FrontalDomainPattern {
    /// Compile the pattern for a probe root such as `clever-cloud.com`.
    pub fn new(probe_root: &str) -> Result<Self> {
        let root = normalize(probe_root);
        if root.is_empty() {
            return Err(ZoneCheckError::InvalidPattern(
                "probe root must not be empty".into(),
            ));
        }

        let pattern = format!(r"^domain\.([A-Za-z0-9-]+)\.{}$", regex::escape(&root));
        let regex = Regex::new(&pattern).map_err(|e| ZoneCheckError::InvalidPattern(e.to_string()))?;

        Ok(Self { regex })
    }

    /// Extract the zone from a canonical name, if it is a frontal hostname.
    #[must_use]
    pub fn zone_of(&self, canonical_name: &str) -> Option<Zone> {
        let name = canonical_name.trim_end_matches('.');
        self.regex
            .captures(name)
            .and_then(|caps| caps.get(1))
            .map(|m| Zone::new(m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_platform_is_clever_cloud() {
        let platform = Platform::default();
        assert_eq!(platform.api_base, "https://api.clever-cloud.com");
        assert_eq!(
            platform.probe_hostname(&Zone::from("par")),
            "domain.par.clever-cloud.com"
        );
    }

    #[test]
    fn owned_suffix_rules() {
        let owned = Platform::default().owned_domains();
        assert!(owned.matches("www.clever-cloud.com"));
        assert!(owned.matches("clever-cloud.com"));
        assert!(owned.matches("API.Clever-Cloud.com."));
        assert!(owned.matches("my-app.cleverapps.io"));
        assert!(!owned.matches("notclever-cloud.com"));
        assert!(!owned.matches("clever-cloud.com.evil.net"));
        assert!(!owned.matches("example.com"));
    }

    #[test]
    fn empty_suffixes_are_dropped() {
        let owned = OwnedDomains::new(["", ".", "example.org"]);
        assert_eq!(owned.suffixes(), ["example.org"]);
        assert!(!owned.matches("com"));
    }

    #[test]
    fn frontal_pattern_captures_zone() {
        let pattern = Platform::default().frontal_pattern().unwrap();
        assert_eq!(
            pattern.zone_of("domain.par.clever-cloud.com"),
            Some(Zone::from("par"))
        );
        assert_eq!(
            pattern.zone_of("domain.scw-par.clever-cloud.com."),
            Some(Zone::from("scw-par"))
        );
        assert_eq!(pattern.zone_of("domain.par.clever-cloud.com.evil.net"), None);
        assert_eq!(pattern.zone_of("domain.a.b.clever-cloud.com"), None);
        assert_eq!(pattern.zone_of("www.clever-cloud.com"), None);
        assert_eq!(pattern.zone_of("domainXparXclever-cloudXcom"), None);
    }

    #[test]
    fn frontal_pattern_rejects_empty_root() {
        assert!(matches!(
            FrontalDomainPattern::new("."),
            Err(ZoneCheckError::InvalidPattern(_))
        ));
    }

    #[test]
    fn platform_fills_missing_fields() {
        let platform: Platform = serde_json::from_str(r#"{"probe_root":"example.net"}"#).unwrap();
        assert_eq!(platform.api_base, "https://api.clever-cloud.com");
        assert_eq!(platform.probe_root, "example.net");
        assert_eq!(platform.owned_suffixes.len(), 4);
    }
}
