//! Natkeys-DB: Fixture schema, migrations, and natural-key query operations
//!
//! This crate provides the five-table fixture schema used to exercise
//! natural-key lookup behavior, built on SQLite with rusqlite and r2d2
//! connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching the fixture tables
//! - `queries` - Lookup and get-or-create operations keyed by natural keys
//!
//! # Example
//!
//! ```
//! use natkeys_db::pool::{init_memory_pool, get_conn};
//! use natkeys_db::queries::{children, parents};
//!
//! let pool = init_memory_pool().unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let child = children::get_or_create_by_natural_key(&conn, "p1", "g1", "mode1").unwrap();
//! let parent = parents::get_by_natural_key(&conn, "p1", "g1").unwrap().unwrap();
//! assert_eq!(child.parent_id, parent.id);
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
