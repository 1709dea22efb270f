//! Arabizi-to-Arabic transliteration with dictionary suggestions.
//!
//! Arabizi is the Latin-letter-and-digit chat alphabet for Arabic
//! ("mar7aba", "3arabi"). This crate converts it to Arabic script via
//! ordered lookup-table scanning and offers substring suggestion lookup
//! over a built-in vocabulary. All operations are pure functions over
//! immutable tables; none of them can fail on any input.

pub mod suggest;
pub mod translit;
pub mod unicode;
