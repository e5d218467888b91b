//! ModelWithSingleUniqueField operations.
//!
//! The natural key here is the single globally-unique `code` column.

use natkeys_common::{Error, Result, SingleUniqueId};
use rusqlite::Connection;

use super::insert_error;
use crate::models::ModelWithSingleUniqueField;

/// Create a new row with the given code.
///
/// # Returns
///
/// * `Ok(ModelWithSingleUniqueField)` - The created row
/// * `Err(Error)` - If the code already exists, exceeds the max length, or a
///   database error occurs
pub fn create(conn: &Connection, code: &str) -> Result<ModelWithSingleUniqueField> {
    conn.execute(
        "INSERT INTO model_with_single_unique_field (code) VALUES (?1)",
        rusqlite::params![code],
    )
    .map_err(|e| insert_error(e, &format!("Code '{}' already exists", code)))?;

    Ok(ModelWithSingleUniqueField {
        id: SingleUniqueId::from(conn.last_insert_rowid()),
        code: code.to_string(),
    })
}

/// Get a row by primary key.
pub fn get(conn: &Connection, id: SingleUniqueId) -> Result<Option<ModelWithSingleUniqueField>> {
    let result = conn.query_row(
        "SELECT id, code FROM model_with_single_unique_field WHERE id = ?1",
        [i64::from(id)],
        ModelWithSingleUniqueField::from_row,
    );
    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Look a row up by its natural key.
pub fn get_by_code(conn: &Connection, code: &str) -> Result<Option<ModelWithSingleUniqueField>> {
    let result = conn.query_row(
        "SELECT id, code FROM model_with_single_unique_field WHERE code = ?1",
        [code],
        ModelWithSingleUniqueField::from_row,
    );
    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get the row for a code, creating it if it does not exist.
pub fn get_or_create(conn: &Connection, code: &str) -> Result<ModelWithSingleUniqueField> {
    match get_by_code(conn, code)? {
        Some(row) => Ok(row),
        None => create(conn, code),
    }
}

/// List all rows ordered by code.
pub fn list(conn: &Connection) -> Result<Vec<ModelWithSingleUniqueField>> {
    let mut stmt = conn
        .prepare("SELECT id, code FROM model_with_single_unique_field ORDER BY code ASC")
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], ModelWithSingleUniqueField::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Delete a row by primary key.
///
/// Returns `Ok(false)` when the row did not exist.
pub fn delete(conn: &Connection, id: SingleUniqueId) -> Result<bool> {
    let n = conn
        .execute(
            "DELETE FROM model_with_single_unique_field WHERE id = ?1",
            [i64::from(id)],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}
