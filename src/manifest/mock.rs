use crate::error::{Error, Result};
use crate::manifest::Manifest;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Mock manifest for testing without touching the filesystem
pub struct MockManifest {
    path: PathBuf,
    content: Mutex<Option<String>>,
    fail_write: bool,
    writes: Mutex<usize>,
}

impl MockManifest {
    /// Create a mock holding `content`
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        MockManifest {
            path: path.into(),
            content: Mutex::new(Some(content.into())),
            fail_write: false,
            writes: Mutex::new(0),
        }
    }

    /// Create a mock whose reads fail as if the file did not exist
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        MockManifest {
            path: path.into(),
            content: Mutex::new(None),
            fail_write: false,
            writes: Mutex::new(0),
        }
    }

    /// Make every write fail with a permission error
    pub fn with_failing_write(mut self) -> Self {
        self.fail_write = true;
        self
    }

    /// Current content, `None` for a missing file
    pub fn content(&self) -> Option<String> {
        self.content.lock().ok().and_then(|c| c.clone())
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or(0)
    }
}

impl Manifest for MockManifest {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_to_string(&self) -> Result<String> {
        self.content().ok_or_else(|| {
            Error::io(
                &self.path,
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            )
        })
    }

    fn write_all(&self, content: &str) -> Result<()> {
        if self.fail_write {
            return Err(Error::io(
                &self.path,
                io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
            ));
        }

        if let Ok(mut current) = self.content.lock() {
            *current = Some(content.to_string());
        }
        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
        Ok(())
    }
}
