//! The storage accessor shared by the route handlers.
//!
//! [Database] owns the single SQLite connection for the process and runs
//! parameterized statements against it. Every failure from SQLite is turned
//! into [Error::Storage].

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, Params, Row};

use crate::{Error, database_id::DatabaseId, transaction::create_transaction_table};

/// A handle to the application's SQLite database.
///
/// Cloning the handle is cheap and every clone refers to the same connection.
/// Statements from concurrent requests are run one at a time.
#[derive(Debug, Clone)]
pub struct Database {
    connection: Arc<Mutex<Connection>>,
}

/// The result of running a write statement with [Database::execute] or
/// [Database::insert].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOutcome {
    /// The row ID of the inserted row, only set by [Database::insert].
    pub generated_id: Option<DatabaseId>,
    /// How many rows the statement changed.
    pub rows_affected: usize,
}

impl Database {
    /// Wrap an open SQLite `connection`.
    pub fn new(connection: Connection) -> Self {
        Self {
            connection: Arc::new(Mutex::new(connection)),
        }
    }

    /// Run a read statement `sql` and map every row with `map_row`.
    ///
    /// An empty result is an empty [Vec], not an error.
    ///
    /// # Errors
    /// Returns [Error::Storage] if the statement cannot be prepared or run, or
    /// if a row cannot be mapped.
    pub fn query_all<T, P, F>(&self, sql: &str, params: P, map_row: F) -> Result<Vec<T>, Error>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> Result<T, rusqlite::Error>,
    {
        let connection = self.lock()?;
        let mut statement = connection.prepare(sql)?;

        let rows = statement
            .query_map(params, map_row)?
            .collect::<Result<Vec<T>, rusqlite::Error>>()?;

        Ok(rows)
    }

    /// Run a read statement `sql` that matches at most one row.
    ///
    /// Returns `Ok(None)` when no row matches. If more than one row matches,
    /// only the first is returned.
    ///
    /// # Errors
    /// Returns [Error::Storage] if the statement cannot be prepared or run, or
    /// if the row cannot be mapped.
    pub fn query_one<T, P, F>(&self, sql: &str, params: P, map_row: F) -> Result<Option<T>, Error>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> Result<T, rusqlite::Error>,
    {
        let connection = self.lock()?;
        let mut statement = connection.prepare(sql)?;

        let row = statement.query_row(params, map_row).optional()?;

        Ok(row)
    }

    /// Run a write statement `sql` that is not expected to generate a row ID,
    /// e.g. an update or a delete.
    ///
    /// # Errors
    /// Returns [Error::Storage] if the statement cannot be prepared or run,
    /// e.g. on a constraint violation.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<ExecuteOutcome, Error> {
        let connection = self.lock()?;

        let rows_affected = connection.execute(sql, params)?;

        Ok(ExecuteOutcome {
            generated_id: None,
            rows_affected,
        })
    }

    /// Run a statement `sql` that inserts exactly one row and report the row
    /// ID SQLite generated for it.
    ///
    /// # Errors
    /// Returns [Error::Storage] if the statement cannot be prepared or run, or
    /// if it did not change exactly one row.
    pub fn insert<P: Params>(&self, sql: &str, params: P) -> Result<ExecuteOutcome, Error> {
        let connection = self.lock()?;
        let mut statement = connection.prepare(sql)?;

        let generated_id = statement.insert(params)?;

        Ok(ExecuteOutcome {
            generated_id: Some(generated_id),
            rows_affected: 1,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("Could not acquire database lock: {error}");
            Error::Storage("could not acquire the database lock".to_owned())
        })
    }
}

/// Create the tables for the domain models if they do not exist yet.
///
/// Existing tables and their rows are left untouched.
///
/// # Errors
/// Returns an error if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_transaction_table(connection)
}
