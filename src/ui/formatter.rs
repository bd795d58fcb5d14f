//! Pure formatting functions for UI output.
//!
//! Styling goes through `console`, which drops colours when the stream is not
//! a terminal, so piped pipeline logs stay plain text.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the version line before and after the rewrite.
///
/// # Arguments
/// * `old_line` - The declaration line as found in the file
/// * `new_line` - The line that replaces it
pub fn display_line_change(old_line: &str, new_line: &str) {
    println!("\n{}", style("Version line:").bold());
    println!("  From: {}", style(old_line).red());
    println!("  To:   {}", style(new_line).green());
}

/// Render the success line printed after the file was written.
pub fn format_update_summary(file_name: &str, version: &str, build_number: u64) -> String {
    format!(
        "Successfully updated {} version to {}+{}",
        file_name, version, build_number
    )
}
