use web_sys::{window, Storage};

use crate::config::{SESSION_GATE_KEY, SESSION_GATE_VALUE};

/// Minimal key/value store the gate writes its flag to.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.sessionStorage`. Missing window or storage is an error, not a panic.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSessionStore;

fn session_storage() -> Result<Storage, String> {
    let w = window().ok_or("no window")?;
    w.session_storage()
        .map_err(|_| "sessionStorage access denied".to_string())?
        .ok_or_else(|| "sessionStorage unavailable".to_string())
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        session_storage()
            .and_then(|st| {
                st.get_item(key)
                    .map_err(|_| format!("sessionStorage read of {key} failed"))
            })
            .inspect_err(|e| gloo::console::warn!(format!("creator-reels: {e}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        session_storage()
            .and_then(|st| {
                st.set_item(key, value)
                    .map_err(|_| format!("sessionStorage write of {key} failed"))
            })
            .inspect_err(|e| gloo::console::warn!(format!("creator-reels: {e}")))
    }
}

/// Once-per-session sponsor flag. Reads fail open, writes are best effort.
pub struct SessionGate<S> {
    store: S,
}

impl<S: SessionStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn has_been_shown(&self) -> bool {
        match self.store.get(SESSION_GATE_KEY) {
            Ok(v) => v.as_deref() == Some(SESSION_GATE_VALUE),
            Err(_) => false,
        }
    }

    /// A failed write only means the interstitial may come back next click.
    pub fn mark_shown(&self) {
        let _ = self.store.set(SESSION_GATE_KEY, SESSION_GATE_VALUE);
    }
}
