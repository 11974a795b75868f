use std::sync::LazyLock;

use regex::Regex;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+\s*\{").unwrap());

/// Cut a bibliography into blocks, one per `@type{` marker.
///
/// Text before the first marker becomes its own block (preamble, comments).
/// Blocks are slices of the input and keep their original whitespace; blocks
/// that are blank after trimming are dropped. Brace balance is not checked, so
/// marker-looking text inside a field value starts a new block.
pub fn split_entries(text: &str) -> Vec<&str> {
    let mut cuts: Vec<usize> = MARKER_RE.find_iter(text).map(|m| m.start()).collect();
    cuts.push(text.len());

    let mut blocks = Vec::with_capacity(cuts.len());
    let mut start = 0;
    for end in cuts {
        let block = &text[start..end];
        if !block.trim().is_empty() {
            blocks.push(block);
        }
        start = end;
    }
    blocks
}
