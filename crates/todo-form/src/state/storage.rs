/*
[INPUT]:  Key/value JSON file in the platform data directory
[OUTPUT]: Read access to the stored access token, plus token maintenance
[POS]:    Ambient storage - token lifecycle is owned here, not by the form
[UPDATE]: When storage location or file format changes
*/

use anyhow::{Context, Result, anyhow};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use todo_adapter::AccessToken;
use tracing::debug;

/// Key under which the access token is stored
pub const TOKEN_KEY: &str = "accessToken";

/// String key/value store persisted as a single JSON object
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl LocalStorage {
    /// Open the store at its default location
    pub async fn new() -> Result<Self> {
        Self::open(default_storage_path()?).await
    }

    /// Open the store at `path`; a missing file is an empty store
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let items = Self::load_items(&path).await?;
        debug!(path = %path.display(), items = items.len(), "storage opened");
        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_items(path: &Path) -> Result<BTreeMap<String, String>> {
        if !fs::try_exists(path).await.unwrap_or(false) {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("read storage {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).with_context(|| format!("parse storage {}", path.display()))
    }

    pub async fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().await.get(key).cloned()
    }

    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(anyhow!("Storage key cannot be empty"));
        }
        let mut items = self.items.lock().await;
        items.insert(key.to_string(), value.to_string());
        self.save_items(&items).await
    }

    /// Returns whether the key was present
    pub async fn remove_item(&self, key: &str) -> Result<bool> {
        let mut items = self.items.lock().await;
        let removed = items.remove(key).is_some();
        if removed {
            self.save_items(&items).await?;
        }
        Ok(removed)
    }

    /// Token stored under `key`, if any and not blank
    pub async fn access_token(&self, key: &str) -> Option<AccessToken> {
        self.get_item(key).await.and_then(AccessToken::new)
    }

    async fn save_items(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(items)?;

        // Atomic write: write to temp file then rename
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, content).await?;
        fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

/// `<data_dir>/todo-form/local_storage.json`
pub fn default_storage_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("Could not determine data directory"))?;
    Ok(data_dir.join("todo-form").join("local_storage.json"))
}
