use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId, db::Database};

use super::{core::NewTransaction, payload::TransactionPayload};

/// The response body for a newly created transaction.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTransaction {
    /// The ID the database assigned to the transaction.
    pub transaction_id: TransactionId,
}

/// A route handler for creating a new transaction, responds with the new ID.
pub async fn create_transaction_endpoint(
    State(database): State<Database>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionPayload>, Error>,
) -> Result<(StatusCode, Json<CreatedTransaction>), Error> {
    let transaction = payload.validate()?;
    let transaction_id = create_transaction(&transaction, &database)?;

    tracing::debug!("Created transaction {transaction_id}");

    Ok((
        StatusCode::CREATED,
        Json(CreatedTransaction { transaction_id }),
    ))
}

/// Insert `transaction` into the database and return its new ID.
///
/// # Errors
/// This function will return a [Error::Storage] if there is some SQL error.
pub fn create_transaction(
    transaction: &NewTransaction,
    database: &Database,
) -> Result<TransactionId, Error> {
    let outcome = database.insert(
        "INSERT INTO transactions (type, category, amount, date, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        (
            &transaction.kind,
            &transaction.category,
            transaction.amount,
            &transaction.date,
            &transaction.description,
        ),
    )?;

    outcome.generated_id.ok_or_else(|| {
        tracing::error!("Insert did not report a row ID: {outcome:?}");
        Error::Storage("the new transaction was not assigned an ID".to_owned())
    })
}
