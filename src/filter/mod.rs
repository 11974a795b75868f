//! Keep/drop policies applied block by block.

pub mod keywords;
pub mod types;
