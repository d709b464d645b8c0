//! Database ID type definitions.

/// Alias for the integer type SQLite uses for row IDs.
pub type DatabaseId = i64;

/// The ID of a [Transaction](crate::transaction::Transaction).
pub type TransactionId = DatabaseId;
