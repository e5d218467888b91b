//! Rust models matching the fixture tables.
//!
//! This module provides strongly-typed structures that map one-to-one onto
//! the database schema. Ids use the typed wrappers from natkeys-common, and
//! each model implements `from_row` for constructing itself from a
//! `rusqlite::Row`.

use chrono::NaiveDate;
use natkeys_common::{ChildId, ExtraId, KeyedId, ParentId, SingleUniqueId};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// helpers
// ---------------------------------------------------------------------------

/// Parse a typed id from an integer column.
fn parse_id<T: From<i64>>(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<T> {
    let raw: i64 = row.get(idx)?;
    Ok(T::from(raw))
}

/// Parse an ISO-8601 date from a text column.
fn parse_date(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let s: String = row.get(idx)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Row with a single globally-unique code; its natural key is `code` alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelWithSingleUniqueField {
    pub id: SingleUniqueId,
    pub code: String,
}

impl ModelWithSingleUniqueField {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: parse_id(row, 0)?,
            code: row.get(1)?,
        })
    }
}

/// Parent row whose natural key is the pair `(code, group)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NaturalKeyParent {
    pub id: ParentId,
    pub code: String,
    pub group: String,
}

impl NaturalKeyParent {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: parse_id(row, 0)?,
            code: row.get(1)?,
            group: row.get(2)?,
        })
    }
}

/// Child row keyed by `(parent, mode)`. The parent portion of its natural
/// key is nested: resolving `(code, group, mode)` traverses the foreign key.
/// Deleting the parent cascades here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NaturalKeyChild {
    pub id: ChildId,
    pub mode: String,
    pub parent_id: ParentId,
}

impl NaturalKeyChild {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: parse_id(row, 0)?,
            mode: row.get(1)?,
            parent_id: parse_id(row, 2)?,
        })
    }
}

/// Row that references a NaturalKeyChild through the `key` foreign key.
/// Deleting the child cascades here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelWithNaturalKey {
    pub id: KeyedId,
    pub value: String,
    pub key_id: ChildId,
}

impl ModelWithNaturalKey {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: parse_id(row, 0)?,
            value: row.get(1)?,
            key_id: parse_id(row, 2)?,
        })
    }
}

/// Row whose natural key is `(code, date)`, carrying a free-text `extra`
/// column that is not part of the key. `code` and `date` are each also
/// unique on their own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelWithExtraField {
    pub id: ExtraId,
    pub code: String,
    pub date: NaiveDate,
    pub extra: String,
}

impl ModelWithExtraField {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: parse_id(row, 0)?,
            code: row.get(1)?,
            date: parse_date(row, 2)?,
            extra: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_unique_serialization() {
        let row = ModelWithSingleUniqueField {
            id: SingleUniqueId::from(1),
            code: "abc".to_string(),
        };

        let json = serde_json::to_string(&row).unwrap();
        let deserialized: ModelWithSingleUniqueField = serde_json::from_str(&json).unwrap();
        assert_eq!(row, deserialized);
    }

    #[test]
    fn test_parent_serialization() {
        let parent = NaturalKeyParent {
            id: ParentId::from(2),
            code: "p1".to_string(),
            group: "g1".to_string(),
        };

        let json = serde_json::to_string(&parent).unwrap();
        let deserialized: NaturalKeyParent = serde_json::from_str(&json).unwrap();
        assert_eq!(parent, deserialized);
    }

    #[test]
    fn test_child_serialization() {
        let child = NaturalKeyChild {
            id: ChildId::from(3),
            mode: "mode1".to_string(),
            parent_id: ParentId::from(2),
        };

        let json = serde_json::to_string(&child).unwrap();
        let deserialized: NaturalKeyChild = serde_json::from_str(&json).unwrap();
        assert_eq!(child, deserialized);
    }

    #[test]
    fn test_keyed_serialization() {
        let row = ModelWithNaturalKey {
            id: KeyedId::from(4),
            value: "v1".to_string(),
            key_id: ChildId::from(3),
        };

        let json = serde_json::to_string(&row).unwrap();
        let deserialized: ModelWithNaturalKey = serde_json::from_str(&json).unwrap();
        assert_eq!(row, deserialized);
    }

    #[test]
    fn test_extra_field_serialization() {
        let row = ModelWithExtraField {
            id: ExtraId::from(5),
            code: "e1".to_string(),
            date: NaiveDate::from_ymd_opt(2019, 7, 26).unwrap(),
            extra: "free text".to_string(),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("2019-07-26"));
        let deserialized: ModelWithExtraField = serde_json::from_str(&json).unwrap();
        assert_eq!(row, deserialized);
    }
}
