//! Dictionary suggestion lookup over transliterated input.

use tracing::{debug, debug_span};

use crate::translit::{transliterate_full, transliterate_partial, Tables};

/// How raw input is processed before dictionary matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionMode {
    /// Full transliteration.
    Full,
    /// Digit-and-digraph transliteration; plain letters stay Latin.
    Partial,
    /// Full transliteration, then strip one leading particle.
    #[default]
    Strip,
}

impl SuggestionMode {
    /// Parse a mode name. Anything unrecognized falls back to `Strip`,
    /// keeping the lookup permissive over caller-supplied strings.
    pub fn parse(s: &str) -> Self {
        match s {
            "full" => Self::Full,
            "partial" => Self::Partial,
            _ => Self::Strip,
        }
    }
}

/// Return the dictionary values containing the processed input as a
/// contiguous substring, in dictionary definition order.
///
/// An empty processed string matches every value; callers that do not
/// want the whole vocabulary back should check their input first.
pub fn suggestions(tables: &Tables, input: &str, mode: SuggestionMode) -> Vec<String> {
    let _span = debug_span!("suggestions", ?mode).entered();

    let processed = match mode {
        SuggestionMode::Full => transliterate_full(tables, input),
        SuggestionMode::Partial => transliterate_partial(tables, input),
        SuggestionMode::Strip => {
            strip_leading_prefix(tables, &transliterate_full(tables, input))
        }
    };

    let matches: Vec<String> = tables
        .dictionary()
        .iter()
        .filter(|entry| entry.value.contains(&processed))
        .map(|entry| entry.value.clone())
        .collect();

    debug!(processed = %processed, matches = matches.len());
    matches
}

/// Remove the first matching particle from the front, at most once.
fn strip_leading_prefix(tables: &Tables, text: &str) -> String {
    for prefix in tables.prefixes() {
        if let Some(rest) = text.strip_prefix(prefix.as_str()) {
            return rest.to_string();
        }
    }
    text.to_string()
}
