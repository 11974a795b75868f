use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static HEADER_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^\s*@\w+\s*[{(]\s*[^,]+,").unwrap());
static FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)\s*=\s*(?:\{([^}]*)\}|"([^"]*)")"#).unwrap());
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\btitle\s*=\s*(?:\{[^}]+\}|"[^"]+")"#).unwrap());

/// Field name (lowercase) to trimmed value for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: HashMap<String, String>,
}

impl FieldMap {
    /// Missing fields read as the empty string.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_lowercase(), value.trim().to_string());
    }
}

/// Pull `name = {value}` and `name = "value"` pairs out of a record block.
///
/// Permissive scan, not a grammar: a value ends at the first `}` (or `"`), so
/// nested braces truncate it. Values that are neither braced nor quoted
/// (`year = 2020`) are skipped. A repeated field keeps its last value.
pub fn extract_fields(block: &str) -> FieldMap {
    let body = HEADER_STRIP_RE.replace(block, "");
    let body = body.trim();
    let body = body.strip_suffix('}').unwrap_or(body);

    let mut fields = FieldMap::default();
    for caps in FIELD_RE.captures_iter(body) {
        let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
        fields.insert(&caps[1], value);
    }
    fields
}

/// Quick check for a non-empty `title` field straight on the raw block.
///
/// `booktitle` does not count.
pub fn has_title_field(block: &str) -> bool {
    TITLE_RE.is_match(block)
}
