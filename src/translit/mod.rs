//! Arabizi-to-Arabic transliteration engine.
//!
//! Scans input left to right against ordered lookup tables: two-character
//! digraphs first, then doubled vowels, then single characters with
//! position-sensitive vowel handling. Unmatched characters pass through.

mod config;
mod scan;
mod tables;

pub use config::{parse_tables_toml, TablesConfigError};
pub use scan::{transliterate_full, transliterate_partial};
pub use tables::{DictEntry, Tables, DEFAULT_TOML};
