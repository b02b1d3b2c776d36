//! Local persistence for the visitor's language preference.
//!
//! The browser build keeps it in `localStorage`; native builds (tests, local
//! tooling) keep it in a small file under the platform config directory.
//! Failures are reported but never fatal: the site simply falls back to the
//! detected language.

use std::cell::RefCell;

use super::error::StorageError;
use super::language::Language;

/// Key under which the preference is stored.
pub const PREFERENCE_KEY: &str = "preferred-language";

pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// Read the stored language, ignoring unknown values.
pub fn load_language(store: &dyn PreferenceStore) -> Option<Language> {
    match store.load() {
        Ok(raw) => raw.as_deref().and_then(Language::from_tag),
        Err(err) => {
            tracing::warn!(%err, "could not read language preference");
            None
        }
    }
}

pub fn save_language(store: &dyn PreferenceStore, lang: Language) {
    if let Err(err) = store.save(lang.code()) {
        tracing::warn!(%err, lang = %lang, "could not persist language preference");
    }
}

/// Store backing the running platform.
pub fn default_store() -> Box<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::in_config_dir() {
            Some(store) => Box::new(store),
            None => Box::new(MemoryStore::default()),
        }
    }
}

/// In-memory store (tests, or platforms without a config directory).
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(PREFERENCE_KEY)
            .map_err(|_| StorageError::Unavailable("localStorage read failed".into()))
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(PREFERENCE_KEY, value)
            .map_err(|_| StorageError::Unavailable("localStorage write failed".into()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_config_dir() -> Option<Self> {
        let dirs = directories::ProjectDirs::from("com", "BraziliansSnack", "Storefront")?;
        Some(Self::new(dirs.config_dir().join(PREFERENCE_KEY)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw.trim().to_string()).filter(|v| !v.is_empty())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, value)?;
        Ok(())
    }
}
