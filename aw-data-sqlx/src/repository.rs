use aw_data::Entity;
use sqlx::{Database, Pool};
use std::marker::PhantomData;
use std::sync::Arc;

/// SQL-backed repository for one entity type.
///
/// Wraps an `sqlx::Pool<DB>` owned by the caller. The `SELECT` and `INSERT`
/// statements are rendered once from the entity's [`Entity`] metadata when
/// the repository is built. Cloning shares them and the pool handle.
///
/// # Example
///
/// ```ignore
/// let repo = SqlxRepository::<ProductDescription, Sqlite>::new(pool.clone());
/// let all = repo.find_all().await?;
/// ```
pub struct SqlxRepository<T, DB: Database> {
    pool: Pool<DB>,
    select_sql: Arc<str>,
    insert_sql: Arc<str>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity, DB: Database> SqlxRepository<T, DB> {
    pub fn new(pool: Pool<DB>) -> Self {
        Self {
            pool,
            select_sql: select_from::<T>().into(),
            insert_sql: insert_into::<T>().into(),
            _entity: PhantomData,
        }
    }
}

impl<T, DB: Database> SqlxRepository<T, DB> {
    /// Get the underlying pool reference.
    pub fn pool(&self) -> &Pool<DB> {
        &self.pool
    }

    /// `SELECT <columns> FROM <table>`, without any clause.
    pub(crate) fn select_sql(&self) -> &str {
        &self.select_sql
    }

    pub(crate) fn insert_sql(&self) -> &str {
        &self.insert_sql
    }
}

impl<T, DB: Database> Clone for SqlxRepository<T, DB> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            select_sql: Arc::clone(&self.select_sql),
            insert_sql: Arc::clone(&self.insert_sql),
            _entity: PhantomData,
        }
    }
}

impl<T, DB: Database> std::fmt::Debug for SqlxRepository<T, DB> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlxRepository")
            .field("select_sql", &self.select_sql)
            .field("insert_sql", &self.insert_sql)
            .finish_non_exhaustive()
    }
}

/// `SELECT <columns> FROM <table>`
fn select_from<T: Entity>() -> String {
    format!("SELECT {} FROM {}", T::select_list(), T::table_name())
}

/// `INSERT INTO <table> (<columns>) VALUES (?, ...)`
fn insert_into<T: Entity>() -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        T::table_name(),
        T::select_list(),
        placeholders(T::columns().len())
    )
}

pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}
