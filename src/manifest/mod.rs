//! Manifest file access abstraction
//!
//! The workflow reads and writes the target file through the [Manifest]
//! trait so it can run against the real filesystem or an in-memory mock.
//!
//! - [file::FsManifest]: reads and overwrites a file on disk
//! - [mock::MockManifest]: in-memory content for tests

pub mod file;
pub mod mock;

pub use file::FsManifest;
pub use mock::MockManifest;

use crate::error::Result;
use std::path::Path;

/// Whole-file read and write of the target manifest
///
/// Implementations must map underlying failures to
/// [crate::error::Error::Io] carrying the manifest path.
pub trait Manifest: Send + Sync {
    /// Path of the manifest, used in messages and errors
    fn path(&self) -> &Path;

    /// Read the complete text content
    fn read_to_string(&self) -> Result<String>;

    /// Replace the complete text content
    fn write_all(&self, content: &str) -> Result<()>;
}
