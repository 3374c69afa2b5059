use std::io;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, instrument, warn};

/// Persists the sign-in token between runs.
#[derive(Clone, Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TokenStore { path: path.into() }
    }

    #[instrument(skip_all)]
    pub async fn save(&self, token: &str) -> io::Result<()> {
        fs::write(&self.path, token).await?;
        debug!(path = %self.path.display(), "Stored user token");
        Ok(())
    }

    pub async fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(token) if token.is_empty() => Ok(None),
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Reads the token left by a previous run. An unreadable file counts as no token.
    pub async fn restore(&self) -> Option<String> {
        match self.load().await {
            Ok(token) => token,
            Err(e) => {
                warn!(path = %self.path.display(), "⚠️ Unable to read the stored user token: {}", e);
                None
            }
        }
    }

    #[instrument(skip_all)]
    pub async fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
