//! # AoTable Entity
//!
//! The single record type exposed by the API.
//!
//! An [`AoTable`] is a flat record: a server-assigned [`TableId`], a handful
//! of bounded text columns, and seven named flags that default to `false`.
//! There are no cross-field rules; the only checks are the column widths
//! enforced by [`AoTable::check_column_limits`].
//!
//! # Wire Format
//!
//! Records serialize with camelCase keys. Every key is a single word, so
//! [`AoTable::from_json_value`] matches input keys in any letter case
//! (`name`, `Name`, `NAME`). Flags may be sent as booleans, `0`/`1`, or
//! `null`.
//!
//! # Examples
//!
//! ```
//! use ao_tables::domain::entities::AoTable;
//!
//! let table: AoTable = serde_json::from_str(r#"{"Name":"Table1","cache":1}"#).unwrap();
//! assert_eq!(table.name.as_deref(), Some("Table1"));
//! assert!(table.cache);
//! assert!(!table.log);
//! assert!(table.id.is_nil());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::TableId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Maximum length of [`AoTable::name`] in characters.
pub const NAME_MAX_LEN: usize = 255;
/// Maximum length of [`AoTable::description`] in characters.
pub const DESCRIPTION_MAX_LEN: usize = 255;
/// Maximum length of [`AoTable::table_type`] in characters.
pub const TYPE_MAX_LEN: usize = 128;
/// Maximum length of [`AoTable::comment`] in characters.
pub const COMMENT_MAX_LEN: usize = 2048;

/// A table definition record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AoTable {
    /// Record identifier. Nil until the store assigns one.
    #[serde(default, alias = "Id")]
    pub id: TableId,

    /// Display name, indexed for lookup.
    #[serde(default, alias = "Name")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(default, alias = "Description")]
    pub description: Option<String>,

    /// Table type label.
    #[serde(default, rename = "type", alias = "Type")]
    pub table_type: Option<String>,

    /// Long free-form comment.
    #[serde(default, alias = "Comment")]
    pub comment: Option<String>,

    /// Boundary flag.
    #[serde(default, alias = "Boundary", deserialize_with = "flag::deserialize")]
    pub boundary: bool,

    /// Cache flag.
    #[serde(default, alias = "Cache", deserialize_with = "flag::deserialize")]
    pub cache: bool,

    /// History flag.
    #[serde(default, alias = "History", deserialize_with = "flag::deserialize")]
    pub history: bool,

    /// Identifier flag.
    #[serde(default, alias = "Identifier", deserialize_with = "flag::deserialize")]
    pub identifier: bool,

    /// Log flag.
    #[serde(default, alias = "Log", deserialize_with = "flag::deserialize")]
    pub log: bool,

    /// Notify flag.
    #[serde(default, alias = "Notify", deserialize_with = "flag::deserialize")]
    pub notify: bool,

    /// Premium flag.
    #[serde(default, alias = "Premium", deserialize_with = "flag::deserialize")]
    pub premium: bool,
}

impl AoTable {
    /// Creates an unsaved record with the given name and every flag cleared.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns this record with its identifier replaced.
    #[must_use]
    pub fn with_id(mut self, id: TableId) -> Self {
        self.id = id;
        self
    }

    /// Decodes a record from a JSON value, matching keys in any letter case.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if a field has the wrong type or an
    /// object repeats a key under different casings.
    pub fn from_json_value(value: Value) -> serde_json::Result<Self> {
        let value = match value {
            Value::Object(map) => {
                let mut folded = Map::new();
                for (key, field) in map {
                    let key = key.to_ascii_lowercase();
                    if folded.contains_key(&key) {
                        return Err(serde::de::Error::custom(format_args!(
                            "duplicate field `{key}`"
                        )));
                    }
                    folded.insert(key, field);
                }
                Value::Object(folded)
            }
            other => other,
        };
        serde_json::from_value(value)
    }

    /// Copies every non-key field from `source`, keeping this record's id.
    pub fn overwrite_from(&mut self, source: &AoTable) {
        let id = self.id;
        *self = source.clone();
        self.id = id;
    }

    /// Checks every text field against its column width.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::FieldTooLong`] for the first field that
    /// exceeds its limit.
    pub fn check_column_limits(&self) -> DomainResult<()> {
        let columns = [
            ("Name", self.name.as_deref(), NAME_MAX_LEN),
            ("Description", self.description.as_deref(), DESCRIPTION_MAX_LEN),
            ("Type", self.table_type.as_deref(), TYPE_MAX_LEN),
            ("Comment", self.comment.as_deref(), COMMENT_MAX_LEN),
        ];

        for (field, value, max) in columns {
            let actual = value.map_or(0, |v| v.chars().count());
            if actual > max {
                return Err(DomainError::field_too_long(field, max, actual));
            }
        }
        Ok(())
    }
}

/// Lenient flag decoding: `true`/`false`, integers (non-zero is set), or `null`.
mod flag {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawFlag>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawFlag::Bool(b)) => b,
            Some(RawFlag::Int(n)) => n != 0,
            None => false,
        })
    }
}
