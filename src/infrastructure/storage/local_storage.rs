//! File-backed key/value storage.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::domain::entities::AuthToken;
use crate::domain::errors::StorageError;
use crate::domain::ports::TokenStoragePort;

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "authshell";
const APP_NAME: &str = "authshell";

/// Key the bearer token lives under.
pub const TOKEN_KEY: &str = "token";

/// Durable string key/value store kept in a single TOML file.
///
/// Values survive restarts, never expire and are stored in plain text.
pub struct LocalStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalStorage {
    /// Name of the backing file inside the storage directory.
    pub const FILE_NAME: &'static str = "storage.toml";

    /// Opens storage in the per-user data directory.
    ///
    /// # Errors
    /// Returns error if the data directory cannot be determined.
    pub fn new() -> Result<Self, StorageError> {
        let dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| StorageError::NotAvailable("no home directory".to_string()))?;

        Ok(Self::in_dir(dir))
    }

    /// Opens storage in a specific directory.
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(Self::FILE_NAME),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads a value.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or written.
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();

        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| StorageError::read(e.to_string()))?;

        toml::from_str(&content).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Storage file is not valid TOML");
            StorageError::Corrupt(e.to_string())
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = toml::to_string(items).map_err(|e| StorageError::write(e.to_string()))?;

        let parent = self
            .path
            .parent()
            .ok_or_else(|| StorageError::write("invalid storage path"))?;
        fs::create_dir_all(parent).map_err(|e| StorageError::write(e.to_string()))?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| StorageError::write(e.to_string()))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| StorageError::write(e.to_string()))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| StorageError::write(e.error.to_string()))?;

        Ok(())
    }
}

/// Token storage backed by [`LocalStorage`] under [`TOKEN_KEY`].
pub struct LocalTokenStorage {
    storage: LocalStorage,
}

impl LocalTokenStorage {
    /// Creates token storage over the given store.
    #[must_use]
    pub const fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.storage.path()
    }
}

impl TokenStoragePort for LocalTokenStorage {
    fn get_token(&self) -> Result<Option<AuthToken>, StorageError> {
        debug!(path = %self.storage.path().display(), "Reading token from local storage");
        Ok(self
            .storage
            .get_item(TOKEN_KEY)?
            .and_then(AuthToken::non_empty))
    }

    fn store_token(&self, token: &AuthToken) -> Result<(), StorageError> {
        debug!(token = %token, "Writing token to local storage");
        self.storage.set_item(TOKEN_KEY, token.as_str())
    }
}
