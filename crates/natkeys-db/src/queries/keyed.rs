//! ModelWithNaturalKey operations.
//!
//! Rows here carry no natural key of their own; they point at a
//! NaturalKeyChild through the `key` foreign key, so creation by natural key
//! resolves (or creates) the whole parent -> child chain first.

use natkeys_common::{ChildId, Error, KeyedId, Result};
use rusqlite::Connection;

use super::{children, insert_error};
use crate::models::ModelWithNaturalKey;

/// Create a new row pointing at an existing child.
pub fn create(conn: &Connection, key_id: ChildId, value: &str) -> Result<ModelWithNaturalKey> {
    conn.execute(
        "INSERT INTO model_with_natural_key (value, key_id) VALUES (?1, ?2)",
        rusqlite::params![value, i64::from(key_id)],
    )
    .map_err(|e| insert_error(e, &format!("Value '{}' could not be inserted", value)))?;

    Ok(ModelWithNaturalKey {
        id: KeyedId::from(conn.last_insert_rowid()),
        value: value.to_string(),
        key_id,
    })
}

/// Create a row for the child identified by `(code, group, mode)`, creating
/// the parent and child as needed.
pub fn create_by_natural_key(
    conn: &Connection,
    code: &str,
    group: &str,
    mode: &str,
    value: &str,
) -> Result<ModelWithNaturalKey> {
    let child = children::get_or_create_by_natural_key(conn, code, group, mode)?;
    create(conn, child.id, value)
}

/// Get a row by primary key.
pub fn get(conn: &Connection, id: KeyedId) -> Result<Option<ModelWithNaturalKey>> {
    let result = conn.query_row(
        "SELECT id, value, key_id FROM model_with_natural_key WHERE id = ?1",
        [i64::from(id)],
        ModelWithNaturalKey::from_row,
    );
    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List the rows referencing a child ordered by value.
pub fn list_for_child(conn: &Connection, key_id: ChildId) -> Result<Vec<ModelWithNaturalKey>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, value, key_id FROM model_with_natural_key
             WHERE key_id = ?1 ORDER BY value ASC",
        )
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([i64::from(key_id)], ModelWithNaturalKey::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// List all rows ordered by value.
pub fn list(conn: &Connection) -> Result<Vec<ModelWithNaturalKey>> {
    let mut stmt = conn
        .prepare("SELECT id, value, key_id FROM model_with_natural_key ORDER BY value ASC")
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], ModelWithNaturalKey::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Delete a row by primary key.
pub fn delete(conn: &Connection, id: KeyedId) -> Result<bool> {
    let n = conn
        .execute(
            "DELETE FROM model_with_natural_key WHERE id = ?1",
            [i64::from(id)],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}
