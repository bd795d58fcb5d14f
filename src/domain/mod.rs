//! Domain logic - pure text rules independent of file access

pub mod version_line;

pub use version_line::{
    find_version_line, replace_version_line, VersionLine, DEFAULT_BUILD_NUMBER,
};
