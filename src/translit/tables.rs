use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use super::config::{parse_tables_toml, TablesConfigError};

pub const DEFAULT_TOML: &str = include_str!("default_tables.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// One suggestion-dictionary entry: a canonical Arabizi spelling and its
/// Arabic rendering. Lookup searches the values; the keys document the
/// vocabulary and are what table maintainers edit against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictEntry {
    pub key: String,
    pub value: String,
}

/// The immutable lookup tables the engine scans against.
///
/// Built once from TOML (the embedded default or a custom file) and never
/// mutated afterwards, so a `&Tables` can be shared freely across threads.
#[derive(Debug)]
pub struct Tables {
    pub(super) digraphs: BTreeMap<String, String>,
    pub(super) singles: BTreeMap<char, String>,
    pub(super) prefixes: Vec<String>,
    pub(super) dictionary: Vec<DictEntry>,
}

impl Tables {
    /// Set custom tables TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TablesConfigError> {
        // Validate eagerly
        parse_tables_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TablesConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Tables {
        static INSTANCE: OnceLock<Tables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_tables_toml(toml_str).expect("tables TOML must be valid")
        })
    }

    /// Look up a digraph key (a one- or two-character Latin sequence).
    pub fn digraph(&self, pair: &str) -> Option<&str> {
        self.digraphs.get(pair).map(|s| s.as_str())
    }

    /// Look up a single Latin letter or Arabizi digit.
    pub fn single(&self, c: char) -> Option<&str> {
        self.singles.get(&c).map(|s| s.as_str())
    }

    /// True when `c` on its own is a digraph key. Every built-in digraph
    /// key is two characters, so with the default tables this never holds;
    /// custom tables may define one-character digraph entries.
    pub fn is_digraph_key(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        let key: &str = c.encode_utf8(&mut buf);
        self.digraphs.contains_key(key)
    }

    pub fn digraphs(&self) -> &BTreeMap<String, String> {
        &self.digraphs
    }

    pub fn singles(&self) -> &BTreeMap<char, String> {
        &self.singles
    }

    /// Strippable particles, in the order they are tried.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Suggestion vocabulary, in definition order.
    pub fn dictionary(&self) -> &[DictEntry] {
        &self.dictionary
    }
}
