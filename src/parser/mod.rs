pub mod entries;
pub mod fields;
pub mod header;

pub use entries::split_entries;
pub use fields::{extract_fields, has_title_field, FieldMap};
pub use header::{parse_header, EntryHeader};
