//! Reading and formatting the line-oriented `"key" = "value";` strings format.

use crate::error::Error;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// A source string and its key, in the order it appears in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Result of parsing a strings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStrings {
    /// Matched entries in file order, duplicates included
    pub entries: Vec<Entry>,

    /// Non-blank, non-comment lines that did not match the entry pattern
    pub skipped: usize,
}

static ENTRY_REGEX: OnceLock<Regex> = OnceLock::new();

fn entry_regex() -> &'static Regex {
    ENTRY_REGEX.get_or_init(|| {
        Regex::new(r#"^"(.+)"\s*=\s*"(.+)";"#).expect("entry pattern is a valid regex")
    })
}

/// Parse strings-file content into entries.
///
/// Lines are trimmed first. Blank lines and `//` comments are ignored; any
/// other line that does not look like `"KEY" = "VALUE";` is counted in
/// `skipped` rather than treated as an error.
pub fn parse_strings(content: &str) -> ParsedStrings {
    let mut parsed = ParsedStrings::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        match entry_regex().captures(line) {
            Some(caps) => parsed.entries.push(Entry::new(&caps[1], &caps[2])),
            None => parsed.skipped += 1,
        }
    }

    parsed
}

/// Read and parse a strings file from disk.
pub fn read_strings_file(path: &Path) -> Result<ParsedStrings, Error> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_strings(&content))
}

/// Prefix every double quote with a backslash. Nothing else is altered.
pub fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Format one output line, including the trailing newline.
pub fn format_line(key: &str, value: &str) -> String {
    format!("\"{}\" = \"{}\";\n", key, escape_value(value))
}
