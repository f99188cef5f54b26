//! # Identifiers
//!
//! UUID-based identity for stored records.
//!
//! # Examples
//!
//! ```
//! use ao_tables::domain::value_objects::TableId;
//!
//! let id = TableId::generate();
//! assert!(!id.is_nil());
//!
//! let parsed: TableId = id.to_string().parse().unwrap();
//! assert_eq!(parsed, id);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of an [`AoTable`](crate::domain::entities::AoTable) record.
///
/// Wraps a 128-bit UUID. The nil UUID is the "unassigned" value a client
/// sends when it leaves the id out of a request body.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TableId(Uuid);

impl TableId {
    /// Wraps an existing UUID.
    #[inline]
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generates a fresh random (v4) identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the unassigned identifier.
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Returns true if no identifier has been assigned.
    #[inline]
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Returns the underlying UUID.
    #[inline]
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for TableId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<TableId> for Uuid {
    fn from(id: TableId) -> Self {
        id.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TableId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
