//! Database query modules.
//!
//! This module organizes all fixture operations into one module per table:
//! - single_unique: ModelWithSingleUniqueField, keyed by `code`
//! - parents: NaturalKeyParent, keyed by `(code, group)`
//! - children: NaturalKeyChild, keyed by `(parent, mode)` with the parent
//!   portion resolved through the foreign key
//! - keyed: ModelWithNaturalKey, referencing a child through `key`
//! - extras: ModelWithExtraField, keyed by `(code, date)`

use natkeys_common::Error;

pub mod children;
pub mod extras;
pub mod keyed;
pub mod parents;
pub mod single_unique;

/// Map an insert failure to the common error type.
///
/// Uniqueness, length-check, and foreign-key violations are caller mistakes
/// and surface as `InvalidInput` with the given description; anything else is
/// a `Database` error.
fn insert_error(e: rusqlite::Error, conflict_msg: &str) -> Error {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") {
        Error::invalid_input(conflict_msg.to_string())
    } else if msg.contains("CHECK constraint failed") {
        Error::invalid_input(format!("Field exceeds max length 10: {}", msg))
    } else if msg.contains("FOREIGN KEY constraint failed") {
        Error::invalid_input("Referenced row does not exist".to_string())
    } else {
        Error::database(msg)
    }
}
