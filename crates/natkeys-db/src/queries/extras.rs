//! ModelWithExtraField operations.
//!
//! The natural key is `(code, date)`; `code` and `date` are each also unique
//! on their own. The `extra` column is free text outside the key.

use chrono::NaiveDate;
use natkeys_common::{Error, ExtraId, Result};
use rusqlite::Connection;

use super::insert_error;
use crate::models::ModelWithExtraField;

/// Create a new row.
///
/// # Returns
///
/// * `Ok(ModelWithExtraField)` - The created row
/// * `Err(Error)` - If the code, date, or `(code, date)` pair already exists,
///   the code exceeds the max length, or a database error occurs
pub fn create(
    conn: &Connection,
    code: &str,
    date: NaiveDate,
    extra: &str,
) -> Result<ModelWithExtraField> {
    conn.execute(
        "INSERT INTO model_with_extra_field (code, date, extra) VALUES (?1, ?2, ?3)",
        rusqlite::params![code, date.format("%Y-%m-%d").to_string(), extra],
    )
    .map_err(|e| {
        insert_error(
            e,
            &format!("Row ('{}', '{}') conflicts with an existing row", code, date),
        )
    })?;

    Ok(ModelWithExtraField {
        id: ExtraId::from(conn.last_insert_rowid()),
        code: code.to_string(),
        date,
        extra: extra.to_string(),
    })
}

/// Get a row by primary key.
pub fn get(conn: &Connection, id: ExtraId) -> Result<Option<ModelWithExtraField>> {
    let result = conn.query_row(
        "SELECT id, code, date, extra FROM model_with_extra_field WHERE id = ?1",
        [i64::from(id)],
        ModelWithExtraField::from_row,
    );
    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Look a row up by its natural key.
pub fn get_by_natural_key(
    conn: &Connection,
    code: &str,
    date: NaiveDate,
) -> Result<Option<ModelWithExtraField>> {
    let result = conn.query_row(
        "SELECT id, code, date, extra FROM model_with_extra_field
         WHERE code = ?1 AND date = ?2",
        rusqlite::params![code, date.format("%Y-%m-%d").to_string()],
        ModelWithExtraField::from_row,
    );
    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Look a row up by code alone (also unique).
pub fn get_by_code(conn: &Connection, code: &str) -> Result<Option<ModelWithExtraField>> {
    let result = conn.query_row(
        "SELECT id, code, date, extra FROM model_with_extra_field WHERE code = ?1",
        [code],
        ModelWithExtraField::from_row,
    );
    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Update the free-text column of an existing row.
///
/// # Returns
///
/// * `Ok(())` - If the update succeeded
/// * `Err(Error)` - If the row does not exist or a database error occurs
pub fn update_extra(conn: &Connection, id: ExtraId, extra: &str) -> Result<()> {
    let n = conn
        .execute(
            "UPDATE model_with_extra_field SET extra = ?1 WHERE id = ?2",
            rusqlite::params![extra, i64::from(id)],
        )
        .map_err(|e| Error::database(e.to_string()))?;

    if n == 0 {
        return Err(Error::not_found("model_with_extra_field"));
    }

    Ok(())
}

/// List all rows ordered by code.
pub fn list(conn: &Connection) -> Result<Vec<ModelWithExtraField>> {
    let mut stmt = conn
        .prepare("SELECT id, code, date, extra FROM model_with_extra_field ORDER BY code ASC")
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], ModelWithExtraField::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Delete a row by primary key.
pub fn delete(conn: &Connection, id: ExtraId) -> Result<bool> {
    let n = conn
        .execute(
            "DELETE FROM model_with_extra_field WHERE id = ?1",
            [i64::from(id)],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}
