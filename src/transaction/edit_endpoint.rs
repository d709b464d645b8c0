use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use serde_json::{Value, json};

use crate::{Error, database_id::TransactionId, db::Database};

use super::{core::NewTransaction, payload::TransactionPayload};

/// A route handler for replacing every field of a transaction.
///
/// The body must contain all required fields, fields left out are not merged
/// from the stored transaction. An absent description is cleared.
pub async fn edit_transaction_endpoint(
    State(database): State<Database>,
    WithRejection(Path(transaction_id), _): WithRejection<Path<TransactionId>, Error>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionPayload>, Error>,
) -> Result<Json<Value>, Error> {
    let transaction = payload.validate()?;

    match update_transaction(transaction_id, &transaction, &database)? {
        0 => {
            tracing::debug!(
                "Could not update transaction {transaction_id}: update returned zero rows affected"
            );
            Err(Error::NotFound)
        }
        _ => Ok(Json(
            json!({ "message": "Transaction updated successfully" }),
        )),
    }
}

type RowsAffected = usize;

fn update_transaction(
    id: TransactionId,
    transaction: &NewTransaction,
    database: &Database,
) -> Result<RowsAffected, Error> {
    database
        .execute(
            "UPDATE transactions \
            SET \
                type = ?1, \
                category = ?2, \
                amount = ?3, \
                date = ?4, \
                description = ?5 \
            WHERE id = ?6;",
            (
                &transaction.kind,
                &transaction.category,
                transaction.amount,
                &transaction.date,
                &transaction.description,
                id,
            ),
        )
        .map(|outcome| outcome.rows_affected)
}
