//! Typed ID wrappers for type safety across natkeys.
//!
//! This module provides newtype wrappers around the integer surrogate keys of
//! each fixture table, to prevent mixing different kinds of identifiers
//! (e.g., using a ParentId where a ChildId is expected). Ids are assigned by
//! the database, so there is no constructor that invents fresh values; rows
//! hand ids back after insertion.

use serde::{Deserialize, Serialize};

/// Unique identifier for a ModelWithSingleUniqueField row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SingleUniqueId(i64);

impl From<i64> for SingleUniqueId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<SingleUniqueId> for i64 {
    fn from(id: SingleUniqueId) -> Self {
        id.0
    }
}

impl std::fmt::Display for SingleUniqueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a NaturalKeyParent row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParentId(i64);

impl From<i64> for ParentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ParentId> for i64 {
    fn from(id: ParentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ParentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a NaturalKeyChild row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildId(i64);

impl From<i64> for ChildId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ChildId> for i64 {
    fn from(id: ChildId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ChildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a ModelWithNaturalKey row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyedId(i64);

impl From<i64> for KeyedId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<KeyedId> for i64 {
    fn from(id: KeyedId) -> Self {
        id.0
    }
}

impl std::fmt::Display for KeyedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a ModelWithExtraField row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraId(i64);

impl From<i64> for ExtraId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ExtraId> for i64 {
    fn from(id: ExtraId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ExtraId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
