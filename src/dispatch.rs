use web_sys::window;

use crate::config::{sponsor_url, OPEN_FEATURES, OPEN_TARGET};
use crate::directory::CreatorRecord;
use crate::gate::{SessionGate, SessionStore};

/// Somewhere to send the user. Fire and forget.
pub trait NavigationPort {
    fn open(&self, url: &str);
}

/// Opens a new tab without leaking the opener or referrer.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserWindowOpener;

impl NavigationPort for BrowserWindowOpener {
    fn open(&self, url: &str) {
        let Some(w) = window() else { return; };
        match w.open_with_url_and_target_and_features(url, OPEN_TARGET, OPEN_FEATURES) {
            // With noopener the handle is always None, so a blocked popup
            // looks the same as a successful one.
            Ok(_) => {}
            Err(_) => gloo::console::warn!(format!("creator-reels: could not open {url}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LinkState {
    #[default]
    Idle,
    InterstitialPending(Option<CreatorRecord>),
}

/// Decides, per click, whether the sponsor interstitial comes first.
pub struct LinkDispatcher<S, N> {
    gate: SessionGate<S>,
    nav: N,
    sponsor_url: String,
    state: LinkState,
}

impl LinkDispatcher<crate::gate::BrowserSessionStore, BrowserWindowOpener> {
    pub fn browser() -> Self {
        Self::new(
            SessionGate::new(crate::gate::BrowserSessionStore),
            BrowserWindowOpener,
            sponsor_url(),
        )
    }
}

impl<S: SessionStore, N: NavigationPort> LinkDispatcher<S, N> {
    pub fn new(gate: SessionGate<S>, nav: N, sponsor_url: impl Into<String>) -> Self {
        Self {
            gate,
            nav,
            sponsor_url: sponsor_url.into(),
            state: LinkState::Idle,
        }
    }

    pub fn state(&self) -> &LinkState {
        &self.state
    }

    #[cfg(test)]
    pub fn gate(&self) -> &SessionGate<S> {
        &self.gate
    }

    /// The record waiting behind the interstitial, if one is showing.
    pub fn pending(&self) -> Option<&CreatorRecord> {
        match &self.state {
            LinkState::InterstitialPending(target) => target.as_ref(),
            LinkState::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, LinkState::InterstitialPending(_))
    }

    /// A click on a creator's link. While an interstitial is already up the
    /// newer click replaces its target.
    pub fn open_link(&mut self, record: Option<&CreatorRecord>) {
        let Some(record) = record.filter(|r| r.has_link()) else { return; };

        if self.gate.has_been_shown() {
            self.nav.open(&record.url);
            return;
        }
        self.state = LinkState::InterstitialPending(Some(record.clone()));
    }

    /// "Not now". Does not use up the once-per-session allowance.
    pub fn dismiss(&mut self) {
        self.state = LinkState::Idle;
    }

    /// "Continue": sponsor first, then the creator.
    pub fn proceed(&mut self) {
        let LinkState::InterstitialPending(target) = std::mem::take(&mut self.state) else {
            return;
        };

        self.nav.open(&self.sponsor_url);
        self.gate.mark_shown();
        if let Some(target) = target {
            self.nav.open(&target.url);
        }
    }
}
