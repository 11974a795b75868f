use std::sync::LazyLock;

use regex::Regex;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*@\s*([^{(]+)[{(]\s*([^,]+),").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHeader {
    /// Lowercased, trimmed.
    pub entry_type: String,
    /// Trimmed, case preserved.
    pub key: String,
}

/// Parse `@type{key,` at the start of a block.
///
/// Returns `None` for anything else; callers treat that block as preamble.
pub fn parse_header(block: &str) -> Option<EntryHeader> {
    let caps = HEADER_RE.captures(block)?;
    Some(EntryHeader {
        entry_type: caps[1].trim().to_lowercase(),
        key: caps[2].trim().to_string(),
    })
}
