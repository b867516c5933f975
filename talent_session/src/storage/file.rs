use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::config::TOKEN_STORE_PATH;
use super::types::TokenStore;

/// Token store backed by a single file at a well-known path.
///
/// Survives process restarts the way browser-local storage survives page
/// reloads. IO failures are logged and swallowed: an unwritable path makes
/// the store behave as a no-op, it never propagates an error to callers.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the path configured via `TOKEN_STORE_PATH`.
    pub fn from_env() -> Self {
        Self::new(TOKEN_STORE_PATH.clone())
    }
}

impl TokenStore for FileTokenStore {
    fn set(&self, token: &str) {
        if let Err(e) = fs::write(&self.path, token) {
            tracing::warn!("token store write failed at {:?}: {}", self.path, e);
        }
    }

    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(token) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("token store read failed at {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!("token store clear failed at {:?}: {}", self.path, e);
            }
        }
    }
}
