//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `TransactionPayload` request body
//! - Database functions for storing and querying transactions
//! - Route handlers for creating, reading, updating and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod payload;

pub use self::core::{EXPENSE, INCOME, NewTransaction, Transaction, create_transaction_table};
pub use create_endpoint::{create_transaction, create_transaction_endpoint};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use get_endpoint::{get_transaction_endpoint, get_transactions_endpoint};
pub use payload::TransactionPayload;
