use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::ops::Range;

/// Anchored at line start. CRLF mode keeps `\r` out of the captured remainder
/// so a Windows line terminator survives the rewrite.
static VERSION_LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mR)^(version:[ \t]*)([0-9]+\.[0-9]+\.[0-9]+)(\+?[0-9]*.*)$")
        .expect("Failed to compile version line regex")
});

/// Build suffix written when nothing else is configured.
pub const DEFAULT_BUILD_NUMBER: u64 = 1;

/// A `version: X.Y.Z[+B]` declaration located in file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLine {
    /// `version:` plus any whitespace that followed it
    pub prefix: String,
    /// The three-component numeric version
    pub version: String,
    /// Everything after the numeric version, usually `+<build>`
    pub remainder: String,
    /// Byte range of the whole line within the content, terminator excluded
    pub span: Range<usize>,
}

impl VersionLine {
    /// Build the replacement line, discarding the old remainder.
    pub fn rewrite(&self, new_version: &str, build_number: u64) -> String {
        format!("{}{}+{}", self.prefix, new_version, build_number)
    }
}

impl fmt::Display for VersionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.version, self.remainder)
    }
}

/// Finds the first version declaration line in `content`.
///
/// Returns `None` when no line has the `version: X.Y.Z[+B]` shape.
pub fn find_version_line(content: &str) -> Option<VersionLine> {
    let captures = VERSION_LINE_PATTERN.captures(content)?;

    let whole = captures.get(0)?;
    let prefix = captures.get(1)?;
    let version = captures.get(2)?;
    let remainder = captures.get(3).map(|m| m.as_str()).unwrap_or("");

    Some(VersionLine {
        prefix: prefix.as_str().to_string(),
        version: version.as_str().to_string(),
        remainder: remainder.to_string(),
        span: whole.range(),
    })
}

/// Replaces the first version declaration line with `new_version` and `+build_number`.
///
/// The new version is spliced in literally. All bytes outside the matched
/// line are returned untouched. Returns the updated content together with the
/// line that was replaced, or `None` if no declaration line exists.
pub fn replace_version_line(
    content: &str,
    new_version: &str,
    build_number: u64,
) -> Option<(String, VersionLine)> {
    let line = find_version_line(content)?;
    let replacement = line.rewrite(new_version, build_number);

    let mut updated = String::with_capacity(content.len() + replacement.len());
    updated.push_str(&content[..line.span.start]);
    updated.push_str(&replacement);
    updated.push_str(&content[line.span.end..]);

    Some((updated, line))
}
