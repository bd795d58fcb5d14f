//! User interface module - status, success and error output.

pub mod formatter;

pub use formatter::{
    display_error, display_line_change, display_status, display_success, format_update_summary,
};
