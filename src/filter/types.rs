use tracing::{debug, trace};

use crate::parser::{has_title_field, parse_header};

/// Entry types that are always removed (compared lowercase).
pub const EXCLUDED_TYPES: &[&str] = &["book", "proceedings"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    ExcludedType,
    MissingTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Not a record; always kept.
    Preamble,
    Keep,
    Drop(DropReason),
}

pub fn judge(block: &str) -> Verdict {
    let Some(header) = parse_header(block) else {
        return Verdict::Preamble;
    };
    if EXCLUDED_TYPES.contains(&header.entry_type.as_str()) {
        debug!(key = %header.key, entry_type = %header.entry_type, "dropping excluded type");
        return Verdict::Drop(DropReason::ExcludedType);
    }
    if !has_title_field(block) {
        debug!(key = %header.key, "dropping entry without title");
        return Verdict::Drop(DropReason::MissingTitle);
    }
    Verdict::Keep
}

#[derive(Debug, Default)]
pub struct TypeFilterOutcome<'a> {
    /// Kept blocks in input order, preambles included.
    pub kept: Vec<&'a str>,
    pub processed: usize,
    pub removed_type: usize,
    pub removed_notitle: usize,
}

impl TypeFilterOutcome<'_> {
    pub fn kept_count(&self) -> usize {
        self.kept.len()
    }
}

pub fn filter_types(text: &str) -> TypeFilterOutcome<'_> {
    let blocks = crate::parser::split_entries(text);
    let mut outcome = TypeFilterOutcome {
        processed: blocks.len(),
        ..Default::default()
    };
    for block in blocks {
        match judge(block) {
            Verdict::Preamble => {
                trace!("keeping non-record block");
                outcome.kept.push(block);
            }
            Verdict::Keep => outcome.kept.push(block),
            Verdict::Drop(DropReason::ExcludedType) => outcome.removed_type += 1,
            Verdict::Drop(DropReason::MissingTitle) => outcome.removed_notitle += 1,
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> String {
        std::fs::read_to_string("tests/fixtures/mixed.bib").unwrap()
    }

    #[test]
    fn book_always_dropped() {
        assert_eq!(
            judge("@book{b1, title={X},}"),
            Verdict::Drop(DropReason::ExcludedType)
        );
        assert_eq!(
            judge("@PROCEEDINGS{p1,\n title = {Proc}}"),
            Verdict::Drop(DropReason::ExcludedType)
        );
    }

    #[test]
    fn missing_title_dropped() {
        assert_eq!(
            judge("@article{c1, author={Y},}"),
            Verdict::Drop(DropReason::MissingTitle)
        );
    }

    #[test]
    fn preamble_kept() {
        let out = filter_types("% some comment\n@article{a1, title={T}, }");
        assert_eq!(out.kept, vec!["% some comment\n", "@article{a1, title={T}, }"]);

        let out = filter_types("% some comment\n@article{a1, author={Y}, }");
        assert_eq!(out.kept, vec!["% some comment\n"]);
        assert_eq!(out.removed_notitle, 1);
    }

    #[test]
    fn counts_conserved() {
        let text = fixture();
        let out = filter_types(&text);
        assert_eq!(
            out.kept_count() + out.removed_type + out.removed_notitle,
            out.processed
        );
        assert_eq!(out.removed_type, 2);
        assert_eq!(out.removed_notitle, 2);
    }

    #[test]
    fn order_preserved() {
        let text = fixture();
        let out = filter_types(&text);
        let mut cursor = 0;
        for block in &out.kept {
            let pos = text[cursor..].find(block).map(|p| p + cursor);
            assert!(pos.is_some(), "kept block out of order: {block:?}");
            cursor = pos.unwrap() + block.len();
        }
    }

    #[test]
    fn second_pass_is_idempotent() {
        let text = fixture();
        let once = filter_types(&text).kept.concat();
        let twice = filter_types(&once);
        assert_eq!(twice.kept.concat(), once);
        assert_eq!(twice.removed_type + twice.removed_notitle, 0);
    }
}
