use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::WithRejection;
use rusqlite::params_from_iter;
use serde::{Deserialize, Serialize};

use crate::{
    Amount, Error,
    db::Database,
    transaction::{EXPENSE, INCOME},
};

use super::SummaryFilter;

/// The optional query parameters of the summary endpoint.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    /// Only include transactions dated on or after this `YYYY-MM-DD` date.
    pub start_date: Option<String>,
    /// Only include transactions dated on or before this `YYYY-MM-DD` date.
    pub end_date: Option<String>,
    /// Only include transactions in this category.
    pub category: Option<String>,
}

/// Income and expense totals, and the difference between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of the amounts of income transactions.
    pub total_income: Amount,
    /// The sum of the amounts of expense transactions.
    pub total_expenses: Amount,
    /// `total_income - total_expenses`.
    pub balance: Amount,
}

impl Summary {
    /// Create a summary from the two totals.
    pub fn new(total_income: Amount, total_expenses: Amount) -> Self {
        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }
}

/// A route handler for the income and expense totals of the transactions
/// matching the query parameters.
pub async fn get_summary_endpoint(
    State(database): State<Database>,
    WithRejection(Query(query), _): WithRejection<Query<SummaryQuery>, Error>,
) -> Result<Json<Summary>, Error> {
    get_summary(&SummaryFilter::from(&query), &database).map(Json)
}

/// Sum income and expenses over the transactions matching `filter` in one
/// query.
///
/// Both totals are zero when no transactions match.
///
/// # Errors
/// This function will return a [Error::Storage] if there is some SQL error.
pub fn get_summary(filter: &SummaryFilter, database: &Database) -> Result<Summary, Error> {
    let query = format!(
        "SELECT \
            COALESCE(SUM(CASE WHEN type = '{INCOME}' THEN amount ELSE 0 END), 0), \
            COALESCE(SUM(CASE WHEN type = '{EXPENSE}' THEN amount ELSE 0 END), 0) \
        FROM transactions {}",
        filter.where_clause()
    );

    let totals = database.query_one(&query, params_from_iter(filter.parameters()), |row| {
        Ok((row.get::<_, Amount>(0)?, row.get::<_, Amount>(1)?))
    })?;

    let (total_income, total_expenses) = totals.unwrap_or((Amount::ZERO, Amount::ZERO));

    Ok(Summary::new(total_income, total_expenses))
}
