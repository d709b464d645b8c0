use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use serde_json::{Value, json};

use crate::{Error, database_id::TransactionId, db::Database};

/// A route handler for deleting a transaction.
///
/// Responds with 404 if no transaction has the ID, including when it was
/// already deleted.
pub async fn delete_transaction_endpoint(
    State(database): State<Database>,
    WithRejection(Path(transaction_id), _): WithRejection<Path<TransactionId>, Error>,
) -> Result<Json<Value>, Error> {
    match delete_transaction(transaction_id, &database)? {
        0 => {
            tracing::debug!("Could not delete transaction {transaction_id}: no such transaction");
            Err(Error::NotFound)
        }
        _ => Ok(Json(
            json!({ "message": "Transaction deleted successfully" }),
        )),
    }
}

type RowsAffected = usize;

fn delete_transaction(id: TransactionId, database: &Database) -> Result<RowsAffected, Error> {
    database
        .execute("DELETE FROM transactions WHERE id = ?1", [id])
        .map(|outcome| outcome.rows_affected)
}
