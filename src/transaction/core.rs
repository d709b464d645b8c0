//! Defines the core data model and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Amount, Error, database_id::TransactionId, db::Database};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is `"income"` or an `"expense"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// What the money was spent on or earned from, e.g. "salary" or "rent".
    pub category: String,
    /// The amount of money spent or earned.
    ///
    /// Amounts are positive by convention, the direction of the money comes
    /// from [Transaction::kind].
    pub amount: Amount,
    /// When the transaction happened as a `YYYY-MM-DD` string.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
}

/// The value of [Transaction::kind] for money earned.
pub const INCOME: &str = "income";
/// The value of [Transaction::kind] for money spent.
pub const EXPENSE: &str = "expense";

/// A transaction that has passed validation but has not been stored yet.
///
/// Create one with [TransactionPayload::validate](super::TransactionPayload::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Whether the transaction is `"income"` or an `"expense"`.
    pub kind: String,
    /// What the money was spent on or earned from.
    pub category: String,
    /// The amount of money spent or earned, never zero.
    pub amount: Amount,
    /// When the transaction happened as a `YYYY-MM-DD` string.
    pub date: String,
    /// An optional text description.
    pub description: Option<String>,
}

impl NewTransaction {
    /// Attach the ID the database assigned to this transaction.
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            date: self.date,
            description: self.description,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

const SELECT_TRANSACTION: &str =
    "SELECT id, type, category, amount, date, description FROM transactions";

/// Retrieve every transaction in the order the database stores them.
///
/// # Errors
/// This function will return a [Error::Storage] if there is some SQL error.
pub fn get_all_transactions(database: &Database) -> Result<Vec<Transaction>, Error> {
    database.query_all(SELECT_TRANSACTION, [], map_transaction_row)
}

/// Retrieve a transaction from the database by its `id`.
///
/// Returns `Ok(None)` if `id` does not refer to a stored transaction.
///
/// # Errors
/// This function will return a [Error::Storage] if there is some SQL error.
pub fn get_transaction(
    id: TransactionId,
    database: &Database,
) -> Result<Option<Transaction>, Error> {
    database.query_one(
        &format!("{SELECT_TRANSACTION} WHERE id = ?1"),
        [id],
        map_transaction_row,
    )
}

/// Create the transaction table in the database.
///
/// `AUTOINCREMENT` stops SQLite from handing out the ID of a deleted row
/// again.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                category TEXT NOT NULL,
                amount NUMERIC NOT NULL,
                date TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let kind = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;
    let description = row.get(5)?;

    Ok(Transaction {
        id,
        kind,
        category,
        amount,
        date,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================
