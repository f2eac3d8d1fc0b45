//! SQLite storage for tag groups, tags and todos.

pub mod presets;
pub mod tag_groups;
pub mod tags;
pub mod todos;
mod workspace;

pub use workspace::UserScope;

use anyhow::Result;
use rusqlite::{Connection, Params, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Database handle wrapping a SQLite connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open or create the database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA foreign_keys=ON;
             PRAGMA busy_timeout=5000;",
        )?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        db.run_migrations()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        conn.execute_batch("PRAGMA foreign_keys=ON;")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        db.run_migrations()?;

        Ok(db)
    }

    /// Run database migrations.
    fn run_migrations(&self) -> Result<()> {
        let mut conn = self.conn.lock().unwrap();
        embedded::migrations::runner().run(&mut *conn)?;
        Ok(())
    }

    /// Execute a function with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock().unwrap();
        f(&conn)
    }

    /// Execute a function with mutable access to the connection (for transactions).
    pub fn with_conn_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn = self.conn.lock().unwrap();
        f(&mut conn)
    }

    /// Run `f` against a store scoped to `user_id` inside one transaction.
    ///
    /// The transaction commits only if `f` succeeds; any error rolls back every
    /// row `f` created.
    pub fn in_user_transaction<F, T>(&self, user_id: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut UserScope<'_>) -> Result<T>,
    {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let value = {
                let mut scope = UserScope::new(&tx, user_id);
                f(&mut scope)?
            };
            tx.commit()?;
            Ok(value)
        })
    }
}

/// Get the current timestamp in milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Whether `sql` returns at least one row. Only an empty result maps to false;
/// every other SQLite error is returned.
pub(crate) fn row_exists<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<bool> {
    match conn.query_row(sql, params, |_| Ok(())) {
        Ok(()) => Ok(true),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Read a TEXT uuid column.
pub(crate) fn uuid_column(row: &Row, column: &str) -> rusqlite::Result<Uuid> {
    let text: String = row.get(column)?;
    parse_uuid(row, column, &text)
}

/// Read a nullable TEXT uuid column.
pub(crate) fn optional_uuid_column(row: &Row, column: &str) -> rusqlite::Result<Option<Uuid>> {
    let text: Option<String> = row.get(column)?;
    text.map(|t| parse_uuid(row, column, &t)).transpose()
}

fn parse_uuid(row: &Row, column: &str, text: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(text).map_err(|e| text_conversion_error(row, column, e))
}

/// Conversion failure for a TEXT column whose content does not parse.
pub(crate) fn text_conversion_error<E>(row: &Row, column: &str, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    let idx = row.as_ref().column_index(column).unwrap_or_default();
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}
