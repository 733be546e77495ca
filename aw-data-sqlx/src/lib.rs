//! # aw-data-sqlx — SQLite backend for the AdventureWorks data layer
//!
//! Implements the [`aw_data::Repository`] contract for [`ProductDescription`]
//! on top of an `sqlx::Pool<Sqlite>` supplied by the caller, and loads the
//! culture links that back its navigation.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SqlxRepository`] | Generic repository wrapper holding an `sqlx::Pool<DB>` |
//! | [`SqlxErrorExt`] | Extension trait to convert `sqlx::Error` → `DataError` (`.into_data_error()`) |
//! | [`SqlxResult<T>`] | Type alias for `Result<T, DataError>` |
//!
//! The pool is never created here; schema and migrations are owned by
//! whoever provisions the database.
//!
//! ```ignore
//! use aw_data::Repository;
//! use aw_data_sqlx::SqlxRepository;
//!
//! let repo = SqlxRepository::<ProductDescription, Sqlite>::new(pool.clone());
//! let description = repo.find_with_cultures(&7).await?;
//! ```
//!
//! [`ProductDescription`]: aw_data::ProductDescription

mod culture;
mod description;
pub mod error;
pub mod repository;

pub use error::{SqlxErrorExt, SqlxResult};
pub use repository::SqlxRepository;

/// Re-exports of the most commonly used types from both `aw-data` and this crate.
pub mod prelude {
    pub use crate::{SqlxErrorExt, SqlxRepository};
    pub use aw_data::prelude::*;
}
