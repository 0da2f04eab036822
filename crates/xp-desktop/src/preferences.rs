//! Display preference persistence
//!
//! The only state that survives a page reload is the CRT-effect toggle. It
//! is stored as a small JSON document through a [`PreferenceStore`], so the
//! same code runs against browser storage and an in-memory store.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;

/// Storage key used by browser-backed stores
pub const PREFERENCES_KEY: &str = "xp-desktop.display";

/// Backing storage for the serialized preferences
pub trait PreferenceStore {
    /// Stored document, or `None` when nothing was saved yet
    fn load(&self) -> DesktopResult<Option<String>>;

    /// Replace the stored document
    fn save(&self, value: &str) -> DesktopResult<()>;
}

/// In-memory store for native hosts and tests
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: RefCell<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a document
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(value.into())),
        }
    }

    /// Raw stored document
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> DesktopResult<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &str) -> DesktopResult<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// Persisted display settings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayPreferences {
    /// Scanline / curvature overlay
    pub crt_enabled: bool,
}

impl DisplayPreferences {
    /// Load preferences, falling back to defaults when missing or unreadable
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let stored = match store.load() {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(%err, "failed to read display preferences");
                return Self::default();
            }
        };
        match stored {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                tracing::warn!(%err, "discarding unreadable display preferences");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Write preferences to the store
    pub fn save(&self, store: &dyn PreferenceStore) -> DesktopResult<()> {
        let json = serde_json::to_string(self)?;
        store.save(&json)
    }

    /// Flip the CRT effect and persist the result
    pub fn toggle_crt(&mut self, store: &dyn PreferenceStore) -> DesktopResult<bool> {
        self.crt_enabled = !self.crt_enabled;
        tracing::debug!(crt_enabled = self.crt_enabled, "display preference changed");
        self.save(store)?;
        Ok(self.crt_enabled)
    }
}
