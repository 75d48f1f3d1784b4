//! Per-navigation classification and page-action rendering.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::task::{AbortHandle, JoinSet};
use tracing::{debug, error};
use url::{Host, Url};

use cczone_core::{Result, Verdict, Zone};

use crate::classifier::Classifier;

/// Icon shown for hosted sites
pub const HOSTED_ICON: &str = "/up_/assets/yes.svg";

/// Icon shown for other sites
pub const NOT_HOSTED_ICON: &str = "/up_/assets/no.svg";

/// Browser tab identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed navigation in a tab
#[derive(Debug, Clone)]
pub struct NavigationEvent {
    /// Tab that navigated
    pub tab_id: TabId,
    /// Target URL
    pub url: String,
}

impl NavigationEvent {
    /// Create an event
    #[must_use]
    pub fn new(tab_id: TabId, url: impl Into<String>) -> Self {
        Self {
            tab_id,
            url: url.into(),
        }
    }

    /// Host of the target URL
    #[must_use]
    pub fn hostname(&self) -> Option<String> {
        hostname_of(&self.url)
    }
}

/// Host of a URL; `None` for unparsable URLs or host-less ones
/// (`about:blank`, `file:///...`). IPv6 hosts come without brackets.
#[must_use]
pub fn hostname_of(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    let host = match url.host()? {
        Host::Domain(domain) => domain.to_string(),
        Host::Ipv4(ip) => ip.to_string(),
        Host::Ipv6(ip) => ip.to_string(),
    };
    (!host.is_empty()).then_some(host)
}

/// What the page action displays for a classified site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "zone", rename_all = "snake_case")]
pub enum PageState {
    /// Hosted in a known zone
    HostedInZone(Zone),
    /// Hosted, zone unknown
    Hosted,
    /// Not hosted
    NotHosted,
}

impl From<Verdict> for PageState {
    fn from(verdict: Verdict) -> Self {
        let hosted = verdict.is_hosted();
        match (verdict.into_zone(), hosted) {
            (Some(zone), _) => Self::HostedInZone(zone),
            (None, true) => Self::Hosted,
            (None, false) => Self::NotHosted,
        }
    }
}

impl PageState {
    /// Icon path for this state
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::HostedInZone(_) | Self::Hosted => HOSTED_ICON,
            Self::NotHosted => NOT_HOSTED_ICON,
        }
    }
}

/// Localizable page-action titles
///
/// `{zone}` in `hosted_in_zone` is replaced with the zone name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    /// Title for a hosted site with a known zone
    #[serde(default = "default_hosted_in_zone")]
    pub hosted_in_zone: String,

    /// Title for a platform-owned site
    #[serde(default = "default_hosted")]
    pub hosted: String,

    /// Title for other sites
    #[serde(default = "default_not_hosted")]
    pub not_hosted: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            hosted_in_zone: default_hosted_in_zone(),
            hosted: default_hosted(),
            not_hosted: default_not_hosted(),
        }
    }
}

impl Messages {
    /// Title for a page state
    #[must_use]
    pub fn title(&self, state: &PageState) -> String {
        match state {
            PageState::HostedInZone(zone) => self.hosted_in_zone.replace("{zone}", zone.as_str()),
            PageState::Hosted => self.hosted.clone(),
            PageState::NotHosted => self.not_hosted.clone(),
        }
    }
}

fn default_hosted_in_zone() -> String {
    String::from("This website is hosted by Clever Cloud (zone = {zone})")
}

fn default_hosted() -> String {
    String::from("This website is hosted by Clever Cloud")
}

fn default_not_hosted() -> String {
    String::from("This website is probably not hosted by Clever Cloud")
}

/// Everything needed to update a tab's page action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageAction {
    /// Tab to update
    pub tab_id: TabId,
    /// Host that was classified
    pub hostname: String,
    /// Classification outcome
    pub state: PageState,
    /// Icon path
    pub icon: &'static str,
    /// Title text
    pub title: String,
}

/// UI surface showing the classification of a tab
#[async_trait]
pub trait PageActionRenderer: Send + Sync {
    /// Set icon and title on the tab and show the page action
    async fn render(&self, action: &PageAction) -> Result<()>;
}

/// Classifies each committed navigation and renders the outcome.
pub struct NavigationHandler {
    classifier: Arc<Classifier>,
    renderer: Arc<dyn PageActionRenderer>,
    messages: Messages,
}

impl NavigationHandler {
    /// Create a handler
    pub fn new(
        classifier: Arc<Classifier>,
        renderer: Arc<dyn PageActionRenderer>,
        messages: Messages,
    ) -> Self {
        Self {
            classifier,
            renderer,
            messages,
        }
    }

    /// Handle a navigation inline.
    ///
    /// Returns the rendered action, or `None` when the URL has no host or
    /// classification or rendering failed (failures are logged).
    pub async fn on_committed(&self, event: &NavigationEvent) -> Option<PageAction> {
        let Some(hostname) = event.hostname() else {
            debug!(tab = %event.tab_id, url = %event.url, "no hostname, skipping");
            return None;
        };

        let verdict = match self.classifier.check(&hostname).await {
            Ok(verdict) => verdict,
            Err(e) => {
                error!(tab = %event.tab_id, hostname = %hostname, error = %e, "classification failed");
                return None;
            }
        };

        let state = PageState::from(verdict);
        let action = PageAction {
            tab_id: event.tab_id,
            icon: state.icon(),
            title: self.messages.title(&state),
            hostname,
            state,
        };

        if let Err(e) = self.renderer.render(&action).await {
            error!(tab = %event.tab_id, error = %e, "failed to render page action");
            return None;
        }

        Some(action)
    }

    /// Handle a navigation in its own task on `tasks`, so tabs classify
    /// independently and the caller can reap them as they finish.
    pub fn dispatch(
        self: &Arc<Self>,
        tasks: &mut JoinSet<Option<PageAction>>,
        event: NavigationEvent,
    ) -> AbortHandle {
        let handler = Arc::clone(self);
        tasks.spawn(async move { handler.on_committed(&event).await })
    }
}
