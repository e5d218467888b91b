//! NaturalKeyParent operations.
//!
//! The natural key is the pair `(code, group)`; neither column is unique on
//! its own.

use natkeys_common::{Error, ParentId, Result};
use rusqlite::Connection;

use super::insert_error;
use crate::models::NaturalKeyParent;

/// Create a new parent row.
///
/// # Returns
///
/// * `Ok(NaturalKeyParent)` - The created row
/// * `Err(Error)` - If the `(code, group)` pair already exists, a field
///   exceeds the max length, or a database error occurs
pub fn create(conn: &Connection, code: &str, group: &str) -> Result<NaturalKeyParent> {
    conn.execute(
        "INSERT INTO natural_key_parent (code, \"group\") VALUES (?1, ?2)",
        rusqlite::params![code, group],
    )
    .map_err(|e| {
        insert_error(
            e,
            &format!("Parent ('{}', '{}') already exists", code, group),
        )
    })?;

    Ok(NaturalKeyParent {
        id: ParentId::from(conn.last_insert_rowid()),
        code: code.to_string(),
        group: group.to_string(),
    })
}

/// Get a parent by primary key.
pub fn get(conn: &Connection, id: ParentId) -> Result<Option<NaturalKeyParent>> {
    let result = conn.query_row(
        "SELECT id, code, \"group\" FROM natural_key_parent WHERE id = ?1",
        [i64::from(id)],
        NaturalKeyParent::from_row,
    );
    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Look a parent up by its natural key.
pub fn get_by_natural_key(
    conn: &Connection,
    code: &str,
    group: &str,
) -> Result<Option<NaturalKeyParent>> {
    let result = conn.query_row(
        "SELECT id, code, \"group\" FROM natural_key_parent
         WHERE code = ?1 AND \"group\" = ?2",
        rusqlite::params![code, group],
        NaturalKeyParent::from_row,
    );
    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get the parent for a natural key, creating it if it does not exist.
pub fn get_or_create(conn: &Connection, code: &str, group: &str) -> Result<NaturalKeyParent> {
    match get_by_natural_key(conn, code, group)? {
        Some(row) => Ok(row),
        None => create(conn, code, group),
    }
}

/// List all parents ordered by code, then group.
pub fn list(conn: &Connection) -> Result<Vec<NaturalKeyParent>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, code, \"group\" FROM natural_key_parent
             ORDER BY code ASC, \"group\" ASC",
        )
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], NaturalKeyParent::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Delete a parent by primary key.
///
/// Dependent NaturalKeyChild rows (and, transitively, ModelWithNaturalKey
/// rows) are removed by the cascade.
pub fn delete(conn: &Connection, id: ParentId) -> Result<bool> {
    let n = conn
        .execute(
            "DELETE FROM natural_key_parent WHERE id = ?1",
            [i64::from(id)],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}
