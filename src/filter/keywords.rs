use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, trace};

use crate::parser::{extract_fields, parse_header};
use crate::terms::{find_matches, IAC_TERMS, QUALITY_TERMS};

/// Fields searched for terms, joined with a space in this order.
pub const SEARCH_FIELDS: [&str; 3] = ["title", "abstract", "keywords"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcludeReason {
    NoIacTerm,
    NoQualityTerm,
}

impl ExcludeReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExcludeReason::NoIacTerm => "no_IaC_term",
            ExcludeReason::NoQualityTerm => "no_quality_term",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludedRow {
    pub key: String,
    pub title: String,
    pub iac_matches: String,
    pub quality_matches: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedRow {
    pub key: String,
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screening {
    Preamble,
    Include(IncludedRow),
    Exclude(ExcludedRow),
}

/// Title as shown in reports: first `limit` characters, line breaks as spaces.
///
/// A CRLF pair counts as one character and becomes one space.
pub fn report_title(title: &str, limit: usize) -> String {
    title
        .replace("\r\n", "\n")
        .chars()
        .take(limit)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

pub fn screen_block(block: &str, title_chars: usize) -> Screening {
    let Some(header) = parse_header(block) else {
        return Screening::Preamble;
    };
    let fields = extract_fields(block);
    let combined = SEARCH_FIELDS.iter().map(|f| fields.get(f)).join(" ");

    let iac = find_matches(&combined, IAC_TERMS);
    let quality = find_matches(&combined, QUALITY_TERMS);
    let title = report_title(fields.get("title"), title_chars);

    if !iac.is_empty() && !quality.is_empty() {
        return Screening::Include(IncludedRow {
            key: header.key,
            title,
            iac_matches: iac.iter().join(";"),
            quality_matches: quality.iter().join(";"),
        });
    }

    let mut reasons = Vec::with_capacity(2);
    if iac.is_empty() {
        reasons.push(ExcludeReason::NoIacTerm);
    }
    if quality.is_empty() {
        reasons.push(ExcludeReason::NoQualityTerm);
    }
    debug!(key = %header.key, ?reasons, "excluding entry");
    Screening::Exclude(ExcludedRow {
        key: header.key,
        title,
        reason: reasons.iter().map(ExcludeReason::as_str).join(";"),
    })
}

#[derive(Debug, Default)]
pub struct ScreenOutcome<'a> {
    /// Preambles and included records, in input order.
    pub kept: Vec<&'a str>,
    pub included: Vec<IncludedRow>,
    pub excluded: Vec<ExcludedRow>,
}

pub fn screen(text: &str, title_chars: usize) -> ScreenOutcome<'_> {
    let mut outcome = ScreenOutcome::default();
    for block in crate::parser::split_entries(text) {
        match screen_block(block, title_chars) {
            Screening::Preamble => {
                trace!("keeping non-record block");
                outcome.kept.push(block);
            }
            Screening::Include(row) => {
                outcome.kept.push(block);
                outcome.included.push(row);
            }
            Screening::Exclude(row) => outcome.excluded.push(row),
        }
    }
    outcome
}
