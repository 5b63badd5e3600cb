// src/cache/store.rs
// =============================================================================
// On-disk store for cached pages and API responses.
//
// One file per key, all in one directory. There is no expiry and no
// validation: whatever is in the file is what the caller gets back. To force
// a refetch, delete the file (or the whole directory).
// =============================================================================

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use super::key::CacheKey;
use crate::error::{Result, ScrapeError};

/// A directory of cache files
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// The directory is created lazily on the first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    /// Returns the cached text for `key`, or `None` if nothing is cached yet.
    ///
    /// Any other I/O problem (permissions, a directory where the file should
    /// be, non-UTF-8 content) is an error, not a miss.
    pub fn read(&self, key: &CacheKey) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), bytes = contents.len(), "cache hit");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ScrapeError::io(path, e)),
        }
    }

    /// Stores `contents` under `key`, replacing any previous entry
    pub fn write(&self, key: &CacheKey, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| ScrapeError::io(&self.dir, e))?;

        let path = self.path_for(key);
        fs::write(&path, contents).map_err(|e| ScrapeError::io(&path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "cache write");
        Ok(())
    }
}
