//! Guard settings, persisted as JSON in `localStorage`.

use serde::{Deserialize, Serialize};

/// Class the embedding page puts on every independently scrollable element.
pub const DEFAULT_SCROLLABLE_CLASS: &str = "scrollable";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub scrollable_class: String,
    pub always_prevent_pull_to_refresh: bool,
    pub debug_log: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            scrollable_class: DEFAULT_SCROLLABLE_CLASS.to_string(),
            always_prevent_pull_to_refresh: false,
            debug_log: false,
        }
    }
}

impl GuardConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Reads the config stored under `key`; anything missing or unreadable
    /// falls back to the defaults.
    pub fn load(key: &str) -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(key) {
                    if let Ok(cfg) = Self::from_json(&raw) {
                        return cfg;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn store(&self, key: &str) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(s) = self.to_json() {
                    let _ = store.set_item(key, &s);
                }
            }
        }
    }
}
