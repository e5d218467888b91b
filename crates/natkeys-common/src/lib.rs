//! Natkeys-Common: Shared types for the natkeys fixture schema.
//!
//! This crate provides common functionality used across natkeys:
//!
//! - **Typed IDs**: Type-safe integer wrappers for each fixture table
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use natkeys_common::{ParentId, Error, Result};
//!
//! // Typed ids wrap database rowids
//! let parent_id = ParentId::from(1);
//!
//! // Use common error types
//! fn example() -> Result<()> {
//!     Err(Error::not_found("parent"))
//! }
//! ```

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::*;
