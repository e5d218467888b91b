//! NaturalKeyChild operations.
//!
//! The natural key is `(parent, mode)`, where the parent portion is itself a
//! natural key: `(code, group, mode)` resolves the parent through the foreign
//! key before matching `mode`.

use natkeys_common::{ChildId, Error, ParentId, Result};
use rusqlite::Connection;

use super::{insert_error, parents};
use crate::models::NaturalKeyChild;

/// Create a new child row under an existing parent.
///
/// # Returns
///
/// * `Ok(NaturalKeyChild)` - The created row
/// * `Err(Error)` - If the `(parent, mode)` pair already exists, the parent
///   does not exist, or a database error occurs
pub fn create(conn: &Connection, parent_id: ParentId, mode: &str) -> Result<NaturalKeyChild> {
    conn.execute(
        "INSERT INTO natural_key_child (mode, parent_id) VALUES (?1, ?2)",
        rusqlite::params![mode, i64::from(parent_id)],
    )
    .map_err(|e| {
        insert_error(
            e,
            &format!("Child ('{}') already exists for parent {}", mode, parent_id),
        )
    })?;

    Ok(NaturalKeyChild {
        id: ChildId::from(conn.last_insert_rowid()),
        mode: mode.to_string(),
        parent_id,
    })
}

/// Get a child by primary key.
pub fn get(conn: &Connection, id: ChildId) -> Result<Option<NaturalKeyChild>> {
    let result = conn.query_row(
        "SELECT id, mode, parent_id FROM natural_key_child WHERE id = ?1",
        [i64::from(id)],
        NaturalKeyChild::from_row,
    );
    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Look a child up by its nested natural key `(code, group, mode)`.
///
/// The parent portion of the key is resolved through the foreign key in a
/// single join.
pub fn get_by_natural_key(
    conn: &Connection,
    code: &str,
    group: &str,
    mode: &str,
) -> Result<Option<NaturalKeyChild>> {
    let result = conn.query_row(
        "SELECT c.id, c.mode, c.parent_id
         FROM natural_key_child c
         JOIN natural_key_parent p ON p.id = c.parent_id
         WHERE p.code = ?1 AND p.\"group\" = ?2 AND c.mode = ?3",
        rusqlite::params![code, group, mode],
        NaturalKeyChild::from_row,
    );
    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get the child for a nested natural key, creating the parent and the child
/// as needed.
pub fn get_or_create_by_natural_key(
    conn: &Connection,
    code: &str,
    group: &str,
    mode: &str,
) -> Result<NaturalKeyChild> {
    if let Some(child) = get_by_natural_key(conn, code, group, mode)? {
        return Ok(child);
    }

    let parent = parents::get_or_create(conn, code, group)?;
    create(conn, parent.id, mode)
}

/// List the children of a parent ordered by mode.
pub fn list_for_parent(conn: &Connection, parent_id: ParentId) -> Result<Vec<NaturalKeyChild>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, mode, parent_id FROM natural_key_child
             WHERE parent_id = ?1 ORDER BY mode ASC",
        )
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([i64::from(parent_id)], NaturalKeyChild::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Delete a child by primary key.
///
/// Dependent ModelWithNaturalKey rows are removed by the cascade.
pub fn delete(conn: &Connection, id: ChildId) -> Result<bool> {
    let n = conn
        .execute(
            "DELETE FROM natural_key_child WHERE id = ?1",
            [i64::from(id)],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;

    #[test]
    fn test_create() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let parent = parents::create(&conn, "p1", "g1").unwrap();
        let child = create(&conn, parent.id, "mode1").unwrap();
        assert_eq!(child.mode, "mode1");
        assert_eq!(child.parent_id, parent.id);
    }

    #[test]
    fn test_create_missing_parent() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let result = create(&conn, ParentId::from(999), "mode1");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_create_duplicate_pair() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let parent = parents::create(&conn, "p1", "g1").unwrap();
        create(&conn, parent.id, "mode1").unwrap();
        let result = create(&conn, parent.id, "mode1");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_same_mode_different_parent() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let p1 = parents::create(&conn, "p1", "g1").unwrap();
        let p2 = parents::create(&conn, "p2", "g1").unwrap();
        create(&conn, p1.id, "mode1").unwrap();
        create(&conn, p2.id, "mode1").unwrap();
    }

    #[test]
    fn test_get_by_natural_key() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let parent = parents::create(&conn, "p1", "g1").unwrap();
        let child = create(&conn, parent.id, "mode1").unwrap();

        let found = get_by_natural_key(&conn, "p1", "g1", "mode1")
            .unwrap()
            .unwrap();
        assert_eq!(found, child);

        // Wrong parent group misses even with the right mode
        assert!(get_by_natural_key(&conn, "p1", "g2", "mode1")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_get_or_create_creates_parent_chain() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let child = get_or_create_by_natural_key(&conn, "p1", "g1", "mode1").unwrap();

        let parent = parents::get_by_natural_key(&conn, "p1", "g1")
            .unwrap()
            .unwrap();
        assert_eq!(child.parent_id, parent.id);

        // Idempotent for the same key
        let again = get_or_create_by_natural_key(&conn, "p1", "g1", "mode1").unwrap();
        assert_eq!(again.id, child.id);
        assert_eq!(parents::list(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_get_or_create_reuses_existing_parent() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let parent = parents::create(&conn, "p1", "g1").unwrap();
        let child = get_or_create_by_natural_key(&conn, "p1", "g1", "mode1").unwrap();
        assert_eq!(child.parent_id, parent.id);
        assert_eq!(parents::list(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_list_for_parent_ordered() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let parent = parents::create(&conn, "p1", "g1").unwrap();
        create(&conn, parent.id, "b").unwrap();
        create(&conn, parent.id, "a").unwrap();

        let children = list_for_parent(&conn, parent.id).unwrap();
        let modes: Vec<_> = children.iter().map(|c| c.mode.as_str()).collect();
        assert_eq!(modes, ["a", "b"]);
    }

    #[test]
    fn test_cascade_from_parent() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let parent = parents::create(&conn, "p1", "g1").unwrap();
        let child = create(&conn, parent.id, "mode1").unwrap();

        parents::delete(&conn, parent.id).unwrap();
        assert!(get(&conn, child.id).unwrap().is_none());
    }
}
