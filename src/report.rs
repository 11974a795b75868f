//! File access for both binaries: reading the input bibliography and writing
//! the filtered bibliography and the CSV reports.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::filter::keywords::{ExcludedRow, IncludedRow};

pub const INCLUDED_HEADER: [&str; 4] = ["key", "title", "iac_matches", "quality_matches"];
pub const EXCLUDED_HEADER: [&str; 3] = ["key", "title", "reason"];

pub fn read_bib(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write kept blocks back to back, unchanged.
pub fn write_bib(path: &Path, blocks: &[&str]) -> Result<()> {
    fs::write(path, blocks.concat()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_included_csv(path: &Path, rows: &[IncludedRow]) -> Result<()> {
    write_csv(path, &INCLUDED_HEADER, rows)
}

pub fn write_excluded_csv(path: &Path, rows: &[ExcludedRow]) -> Result<()> {
    write_csv(path, &EXCLUDED_HEADER, rows)
}

// Header goes out explicitly so empty reports still get one.
fn write_csv<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    let csv_err = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .map_err(csv_err)?;
    w.write_record(header).map_err(csv_err)?;
    for row in rows {
        w.serialize(row).map_err(csv_err)?;
    }
    w.flush().map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
