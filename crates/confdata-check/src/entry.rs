use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// One `(key, type name, raw value)` triple as supplied by the user.
///
/// The type name is kept unresolved so that unknown names can be reported per
/// entry instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEntry {
    pub key: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: String,
}

impl RawEntry {
    /// Parses `KEY:TYPE=VALUE`.
    ///
    /// Splits on the first `:` and then on the first `=`; the value may be empty
    /// and may itself contain `:` or `=`.
    pub fn parse(arg: &str) -> Result<Self> {
        let Some((key, rest)) = arg.split_once(':') else {
            bail!("entry {arg:?} is missing ':' (expected KEY:TYPE=VALUE)");
        };
        let Some((type_name, value)) = rest.split_once('=') else {
            bail!("entry {arg:?} is missing '=' (expected KEY:TYPE=VALUE)");
        };
        if key.is_empty() {
            bail!("entry {arg:?} has an empty key");
        }
        Ok(Self {
            key: key.to_string(),
            type_name: type_name.to_string(),
            value: value.to_string(),
        })
    }
}

/// Reads a JSON array of entries.
pub fn read_entries(path: &Path) -> Result<Vec<RawEntry>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_entry() {
        let e = RawEntry::parse("NUM_REALIZATIONS:POSINT=10").unwrap();
        assert_eq!(e.key, "NUM_REALIZATIONS");
        assert_eq!(e.type_name, "POSINT");
        assert_eq!(e.value, "10");
    }

    #[test]
    fn value_may_contain_separators_or_be_empty() {
        let e = RawEntry::parse("ARG:STR=a=b:c").unwrap();
        assert_eq!(e.type_name, "STR");
        assert_eq!(e.value, "a=b:c");

        let e = RawEntry::parse("EMPTY:STR=").unwrap();
        assert_eq!(e.value, "");
    }

    #[test]
    fn type_name_is_not_resolved_here() {
        let e = RawEntry::parse("K:BOGUS=1").unwrap();
        assert_eq!(e.type_name, "BOGUS");
    }

    #[test]
    fn rejects_malformed_entries() {
        for arg in ["NOCOLON", "K:NOEQUALS", ":INT=1", ""] {
            assert!(RawEntry::parse(arg).is_err(), "{arg:?} must be rejected");
        }
    }

    #[test]
    fn reads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        fs::write(
            &path,
            r#"[{"key": "START", "type": "DATE", "value": "2024-02-29"},
               {"key": "RUNPATH", "type": "FOLDER", "value": "/tmp"}]"#,
        )
        .unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].type_name, "DATE");
        assert_eq!(entries[1].key, "RUNPATH");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_entries(&dir.path().join("nope.json")).is_err());
    }
}
