//! Filesystem access used by the init action.

use std::io;
use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Succeeds if something exists at `path`.
    async fn access(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate `path` and write `contents` to it.
    ///
    /// Parent directories are not created.
    async fn write_file(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

#[async_trait]
impl FileSystem for TokioFileSystem {
    async fn access(&self, path: &Path) -> io::Result<()> {
        tokio::fs::metadata(path).await.map(|_| ())
    }

    async fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}
