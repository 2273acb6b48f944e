//! Set-code resolution: collector-number prefix to full set name.
//!
//! The table is data only. A built-in copy ships in `data/set_codes.json`;
//! callers may load a replacement file at start-up. Either way the table is
//! loaded once and handed to [`SetCodeResolver`] explicitly.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use super::error::{RowError, SET_CODE_LEN};

/// Built-in set-code table.
const BUILTIN_SET_CODES: &str = include_str!("../../data/set_codes.json");

/// Errors loading a set-code table.
#[derive(Debug, Error)]
pub enum SetCodeError {
    /// Table file could not be read.
    #[error("failed to read set-code table {path}: {source}")]
    Io {
        /// Path of the table file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Table content is not a JSON object of strings.
    #[error("invalid set-code table {origin}: {source}")]
    Json {
        /// Where the table came from (file path or `built-in`).
        origin: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable mapping of lowercase set code to full set name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetCodeTable {
    entries: HashMap<String, String>,
}

impl SetCodeTable {
    /// Builds a table from `(code, name)` pairs. Codes are lowercased.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, name)| (code.as_ref().to_lowercase(), name.into()))
                .collect(),
        }
    }

    /// Parses a table from a JSON object of `code -> name`.
    ///
    /// # Errors
    ///
    /// Returns [`SetCodeError::Json`] if `json` is not a string-to-string object.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, SetCodeError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| SetCodeError::Json {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self::from_entries(entries))
    }

    /// Returns the table shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`SetCodeError::Json`] if the embedded data is corrupt.
    pub fn builtin() -> Result<Self, SetCodeError> {
        Self::from_json(BUILTIN_SET_CODES, "built-in")
    }

    /// Loads a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SetCodeError::Io`] if the file cannot be read, or
    /// [`SetCodeError::Json`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, SetCodeError> {
        let json = std::fs::read_to_string(path).map_err(|source| SetCodeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&json, &path.display().to_string())?;
        debug!(path = %path.display(), entries = table.len(), "loaded set-code table");
        Ok(table)
    }

    /// Looks up a set code. `code` must already be lowercase.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Number of known set codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves collector numbers to set names against a shared table.
#[derive(Debug, Clone)]
pub struct SetCodeResolver {
    table: Arc<SetCodeTable>,
}

impl SetCodeResolver {
    /// Creates a resolver over `table`.
    #[must_use]
    pub fn new(table: Arc<SetCodeTable>) -> Self {
        Self { table }
    }

    /// Resolves the set name for a collector number.
    ///
    /// The first three characters of `collector_number`, lowercased, are the
    /// set code. An unknown code is not an error: it yields `Ok(None)` and an
    /// `info` event naming the code.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::CollectorNumberTooShort`] when the collector number
    /// has fewer than three characters.
    pub fn resolve(&self, collector_number: &str) -> Result<Option<&str>, RowError> {
        let code: String = collector_number.chars().take(SET_CODE_LEN).collect();
        if code.chars().count() < SET_CODE_LEN {
            return Err(RowError::collector_number_too_short(collector_number));
        }

        let code = code.to_lowercase();
        let set_name = self.table.get(&code);
        if set_name.is_none() {
            info!(
                collector_number,
                set_code = %code,
                "set code is not in the set-code table"
            );
        }
        Ok(set_name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;

    fn resolver() -> SetCodeResolver {
        SetCodeResolver::new(Arc::new(SetCodeTable::from_entries([
            ("wtr", "Welcome to Rathe"),
            ("ARC", "Arcane Rising"),
        ])))
    }

    #[test]
    fn test_resolve_known_code() {
        assert_eq!(resolver().resolve("WTR001").unwrap(), Some("Welcome to Rathe"));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolver().resolve("arc112").unwrap(), Some("Arcane Rising"));
        assert_eq!(resolver().resolve("ArC112").unwrap(), Some("Arcane Rising"));
    }

    #[test]
    fn test_resolve_unknown_code_logs_info() {
        let resolver = resolver();
        let (result, logs) = capture_logs(|| resolver.resolve("ZZZ999").map(|n| n.map(str::to_owned)));
        assert_eq!(result.unwrap(), None);
        assert!(logs.contains("INFO"), "Expected info event in: {logs}");
        assert!(logs.contains("zzz"), "Expected set code in: {logs}");
    }

    #[test]
    fn test_resolve_short_collector_number_is_row_error() {
        assert_eq!(
            resolver().resolve("AB"),
            Err(RowError::collector_number_too_short("AB"))
        );
        assert!(resolver().resolve("").is_err());
    }

    #[test]
    fn test_resolve_exactly_three_characters() {
        assert_eq!(resolver().resolve("wtr").unwrap(), Some("Welcome to Rathe"));
    }

    #[test]
    fn test_resolve_counts_characters_not_bytes() {
        let resolver = SetCodeResolver::new(Arc::new(SetCodeTable::from_entries([("éa1", "Accent")])));
        assert_eq!(resolver.resolve("ÉA1042").unwrap(), Some("Accent"));
    }

    #[test]
    fn test_builtin_table_parses() {
        let table = SetCodeTable::builtin().unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.get("wtr"), Some("Welcome to Rathe"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = SetCodeTable::from_json("[1, 2]", "inline").unwrap_err();
        assert!(err.to_string().contains("inline"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("codes.json");
        std::fs::write(&path, r#"{"MON": "Monarch"}"#).unwrap();

        let table = SetCodeTable::load(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("mon"), Some("Monarch"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = SetCodeTable::load(Path::new("/nonexistent/codes.json")).unwrap_err();
        assert!(matches!(err, SetCodeError::Io { .. }));
    }
}
