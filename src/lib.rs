//! Filtering of bibliography files: entry type and title checks, and keyword
//! screening against two vocabularies.

pub mod error;
pub mod filter;
pub mod parser;
pub mod report;
pub mod settings;
pub mod terms;

pub use error::{Error, Result};
pub use settings::Settings;
