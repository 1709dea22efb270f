use std::collections::BTreeMap;

use serde::Deserialize;

use super::tables::{DictEntry, Tables};
use crate::unicode::is_arabic_text;

#[derive(Deserialize)]
struct RawTables {
    #[serde(default)]
    prefixes: Vec<String>,
    digraphs: BTreeMap<String, String>,
    singles: BTreeMap<String, String>,
    #[serde(default)]
    dictionary: Vec<DictEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum TablesConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("bad key {key:?} in [{table}]: {reason}")]
    BadKey {
        table: &'static str,
        key: String,
        reason: &'static str,
    },
    #[error("bad value for {key:?} in [{table}]: {reason}")]
    BadValue {
        table: &'static str,
        key: String,
        reason: &'static str,
    },
    #[error("tables already initialized")]
    AlreadyInitialized,
}

/// Parse and validate tables TOML.
///
/// Digraph keys are one or two lowercase-ASCII characters; single keys are
/// exactly one lowercase ASCII letter or digit. Every mapped value, prefix
/// and dictionary value must be Arabic-script text.
pub fn parse_tables_toml(toml_str: &str) -> Result<Tables, TablesConfigError> {
    let raw: RawTables =
        toml::from_str(toml_str).map_err(|e| TablesConfigError::Parse(e.to_string()))?;

    if raw.digraphs.is_empty() {
        return Err(TablesConfigError::Empty("digraphs"));
    }
    if raw.singles.is_empty() {
        return Err(TablesConfigError::Empty("singles"));
    }

    for (key, value) in &raw.digraphs {
        if key.is_empty() || key.len() > 2 || !key.chars().all(valid_key_char) {
            return Err(TablesConfigError::BadKey {
                table: "digraphs",
                key: key.clone(),
                reason: "must be one or two lowercase ASCII letters or digits",
            });
        }
        check_arabic("digraphs", key, value)?;
    }

    let mut singles = BTreeMap::new();
    for (key, value) in &raw.singles {
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) if valid_key_char(c) => c,
            _ => {
                return Err(TablesConfigError::BadKey {
                    table: "singles",
                    key: key.clone(),
                    reason: "must be a single lowercase ASCII letter or digit",
                })
            }
        };
        check_arabic("singles", key, value)?;
        singles.insert(c, value.clone());
    }

    for prefix in &raw.prefixes {
        check_arabic("prefixes", prefix, prefix)?;
    }

    for entry in &raw.dictionary {
        if entry.key.is_empty() || !entry.key.is_ascii() {
            return Err(TablesConfigError::BadKey {
                table: "dictionary",
                key: entry.key.clone(),
                reason: "must be non-empty ASCII",
            });
        }
        check_arabic("dictionary", &entry.key, &entry.value)?;
    }

    Ok(Tables {
        digraphs: raw.digraphs,
        singles,
        prefixes: raw.prefixes,
        dictionary: raw.dictionary,
    })
}

fn valid_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn check_arabic(
    table: &'static str,
    key: &str,
    value: &str,
) -> Result<(), TablesConfigError> {
    if value.is_empty() {
        return Err(TablesConfigError::BadValue {
            table,
            key: key.to_string(),
            reason: "is empty",
        });
    }
    if !is_arabic_text(value) {
        return Err(TablesConfigError::BadValue {
            table,
            key: key.to_string(),
            reason: "must be Arabic-script text",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translit::DEFAULT_TOML;

    #[test]
    fn parse_default_toml() {
        let tables = parse_tables_toml(DEFAULT_TOML).unwrap();
        assert_eq!(tables.digraphs().len(), 6);
        assert_eq!(tables.singles().len(), 29);
        assert_eq!(tables.prefixes().len(), 5);
        assert_eq!(tables.dictionary().len(), 24);
        assert_eq!(tables.digraph("gh"), Some("غ"));
        assert_eq!(tables.single('9'), Some("ص"));
    }

    #[test]
    fn parse_minimal_toml() {
        let toml = r#"
[digraphs]
sh = "ش"

[singles]
s = "س"
"#;
        let tables = parse_tables_toml(toml).unwrap();
        assert!(tables.prefixes().is_empty());
        assert!(tables.dictionary().is_empty());
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_tables_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TablesConfigError::Parse(_)));
    }

    #[test]
    fn error_missing_singles() {
        let toml = r#"
[digraphs]
sh = "ش"
"#;
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TablesConfigError::Parse(_)));
    }

    #[test]
    fn error_empty_digraphs() {
        let toml = r#"
[digraphs]

[singles]
s = "س"
"#;
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TablesConfigError::Empty("digraphs")));
    }

    #[test]
    fn error_digraph_key_too_long() {
        let toml = r#"
[digraphs]
shh = "ش"

[singles]
s = "س"
"#;
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TablesConfigError::BadKey { table: "digraphs", .. }));
    }

    #[test]
    fn error_digraph_key_uppercase() {
        let toml = r#"
[digraphs]
Sh = "ش"

[singles]
s = "س"
"#;
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TablesConfigError::BadKey { .. }));
    }

    #[test]
    fn error_single_key_multichar() {
        let toml = r#"
[digraphs]
sh = "ش"

[singles]
ss = "س"
"#;
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TablesConfigError::BadKey { table: "singles", .. }));
    }

    #[test]
    fn error_single_key_punctuation() {
        let toml = r#"
[digraphs]
sh = "ش"

[singles]
"!" = "س"
"#;
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TablesConfigError::BadKey { table: "singles", .. }));
    }

    #[test]
    fn error_latin_value() {
        let toml = r#"
[digraphs]
sh = "sh"

[singles]
s = "س"
"#;
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TablesConfigError::BadValue { table: "digraphs", .. }));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[digraphs]
sh = "ش"

[singles]
s = ""
"#;
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TablesConfigError::BadValue { table: "singles", .. }));
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn error_latin_prefix() {
        let toml = r#"
prefixes = ["al"]

[digraphs]
sh = "ش"

[singles]
s = "س"
"#;
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TablesConfigError::BadValue { table: "prefixes", .. }));
    }

    #[test]
    fn error_dictionary_empty_key() {
        let toml = r#"
[digraphs]
sh = "ش"

[singles]
s = "س"

[[dictionary]]
key = ""
value = "سلام"
"#;
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TablesConfigError::BadKey { table: "dictionary", .. }));
    }

    #[test]
    fn error_dictionary_latin_value() {
        let toml = r#"
[digraphs]
sh = "ش"

[singles]
s = "س"

[[dictionary]]
key = "salam"
value = "salam"
"#;
        let err = parse_tables_toml(toml).unwrap_err();
        assert!(matches!(err, TablesConfigError::BadValue { table: "dictionary", .. }));
    }
}
