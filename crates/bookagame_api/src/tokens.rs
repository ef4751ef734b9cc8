// --- File: crates/bookagame_api/src/tokens.rs ---
//! Token store implementations.

use bookagame_common::models::SessionTokens;
use bookagame_common::services::{BoxFuture, TokenStore};
use bookagame_common::BookingError;
use bookagame_config::{StorageConfig, TokenBackend};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Keeps the tokens for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Option<SessionTokens>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(tokens: SessionTokens) -> Self {
        Self {
            tokens: RwLock::new(Some(tokens)),
        }
    }

    fn read(&self) -> Option<SessionTokens> {
        match self.tokens.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn write(&self, tokens: Option<SessionTokens>) {
        match self.tokens.write() {
            Ok(mut guard) => *guard = tokens,
            Err(poisoned) => *poisoned.into_inner() = tokens,
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> BoxFuture<'_, Option<String>, BookingError> {
        let token = self.read().map(|t| t.access_token);
        Box::pin(async move { Ok(token) })
    }

    fn refresh_token(&self) -> BoxFuture<'_, Option<String>, BookingError> {
        let token = self.read().map(|t| t.refresh_token);
        Box::pin(async move { Ok(token) })
    }

    fn set_tokens(&self, tokens: SessionTokens) -> BoxFuture<'_, (), BookingError> {
        self.write(Some(tokens));
        Box::pin(async { Ok(()) })
    }

    fn clear_tokens(&self) -> BoxFuture<'_, (), BookingError> {
        self.write(None);
        Box::pin(async { Ok(()) })
    }
}

/// Persists the tokens as a JSON file.
///
/// Writes go to a sibling temp file that is then renamed over the target, so
/// a crash never leaves a half-written token file. A missing or unreadable
/// file reads as "no tokens".
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Option<SessionTokens> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), "failed to read token file: {}", e);
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(tokens) => Some(tokens),
            Err(e) => {
                warn!(path = %self.path.display(), "ignoring malformed token file: {}", e);
                None
            }
        }
    }

    async fn store(&self, tokens: &SessionTokens) -> Result<(), BookingError> {
        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(tokens)?;
        tokio::fs::write(&tmp, bytes).await?;
        restrict_permissions(&tmp).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), "tokens stored");
        Ok(())
    }

    async fn remove(&self) -> Result<(), BookingError> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<(), BookingError> {
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<(), BookingError> {
    Ok(())
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> BoxFuture<'_, Option<String>, BookingError> {
        Box::pin(async move { Ok(self.load().await.map(|t| t.access_token)) })
    }

    fn refresh_token(&self) -> BoxFuture<'_, Option<String>, BookingError> {
        Box::pin(async move { Ok(self.load().await.map(|t| t.refresh_token)) })
    }

    fn set_tokens(&self, tokens: SessionTokens) -> BoxFuture<'_, (), BookingError> {
        Box::pin(async move { self.store(&tokens).await })
    }

    fn clear_tokens(&self) -> BoxFuture<'_, (), BookingError> {
        Box::pin(async move { self.remove().await })
    }
}

/// Builds the token store selected in the configuration.
pub fn token_store_from_config(config: &StorageConfig) -> Arc<dyn TokenStore> {
    match config.backend {
        TokenBackend::File => {
            debug!(path = %config.token_path, "using file token store");
            Arc::new(FileTokenStore::new(&config.token_path))
        }
        TokenBackend::Memory => {
            debug!("using in-memory token store");
            Arc::new(MemoryTokenStore::new())
        }
    }
}
