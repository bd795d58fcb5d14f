use crate::error::{Error, Result};
use crate::manifest::Manifest;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest backed by a file on disk
#[derive(Debug, Clone)]
pub struct FsManifest {
    path: PathBuf,
}

impl FsManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FsManifest { path: path.into() }
    }
}

impl Manifest for FsManifest {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_to_string(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))
    }

    fn write_all(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).map_err(|e| Error::io(&self.path, e))
    }
}
