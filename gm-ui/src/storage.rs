//! The one value kept in browser local storage: the last selected location.

use web_sys::Storage;

/// A single local-storage key.
///
/// Storage being unavailable (private mode, disabled cookies) is logged and
/// treated as nothing stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage() -> Option<Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("[GM] local storage unavailable: {:?}", e);
                None
            }
        }
    }

    /// The stored value, ignoring blanks.
    pub fn load(&self) -> Option<String> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key) {
            Ok(value) => value.and_then(|v| normalize(&v)),
            Err(e) => {
                log::warn!("[GM] reading {:?} failed: {:?}", self.key, e);
                None
            }
        }
    }

    pub fn save(&self, value: &str) {
        let Some(value) = normalize(value) else {
            self.clear();
            return;
        };
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(&self.key, &value) {
                log::warn!("[GM] writing {:?} failed: {:?}", self.key, e);
            }
        }
    }

    pub fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                log::warn!("[GM] clearing {:?} failed: {:?}", self.key, e);
            }
        }
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
