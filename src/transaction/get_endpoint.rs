use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;

use crate::{Error, database_id::TransactionId, db::Database};

use super::core::{Transaction, get_all_transactions, get_transaction};

/// A route handler that responds with every transaction.
pub async fn get_transactions_endpoint(
    State(database): State<Database>,
) -> Result<Json<Vec<Transaction>>, Error> {
    get_all_transactions(&database).map(Json)
}

/// A route handler for getting a transaction by its database ID.
///
/// Responds with 404 if no transaction has the ID.
pub async fn get_transaction_endpoint(
    State(database): State<Database>,
    WithRejection(Path(transaction_id), _): WithRejection<Path<TransactionId>, Error>,
) -> Result<Json<Transaction>, Error> {
    match get_transaction(transaction_id, &database)? {
        Some(transaction) => Ok(Json(transaction)),
        None => {
            tracing::debug!("Transaction {transaction_id} not found");
            Err(Error::NotFound)
        }
    }
}
