//! The request body for creating and updating transactions.

use serde::Deserialize;

use crate::{Amount, Error};

use super::core::NewTransaction;

/// The JSON body accepted by the create and update transaction endpoints.
///
/// Every field is optional at the parsing stage so that a missing field is
/// reported as a validation error rather than a parsing error.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct TransactionPayload {
    /// `"income"` or `"expense"`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// What the money was spent on or earned from.
    #[serde(default)]
    pub category: Option<String>,
    /// The amount of money spent or earned.
    #[serde(default)]
    pub amount: Option<Amount>,
    /// When the transaction happened as a `YYYY-MM-DD` string.
    #[serde(default)]
    pub date: Option<String>,
    /// An optional text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl TransactionPayload {
    /// Check that the required fields are present.
    ///
    /// `type`, `category` and `date` must be non-empty strings and `amount`
    /// must be non-zero. Note that this means an amount of zero is rejected as
    /// missing. `description` may be absent or empty.
    ///
    /// # Errors
    /// Returns [Error::Validation] with the message "Missing required fields"
    /// if any required field is missing.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let kind = non_empty(self.kind).ok_or_else(Error::missing_fields)?;
        let category = non_empty(self.category).ok_or_else(Error::missing_fields)?;
        let amount = self
            .amount
            .filter(|amount| !amount.is_zero())
            .ok_or_else(Error::missing_fields)?;
        let date = non_empty(self.date).ok_or_else(Error::missing_fields)?;

        Ok(NewTransaction {
            kind,
            category,
            amount,
            date,
            description: self.description,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{Amount, Error, transaction::NewTransaction};

    use super::TransactionPayload;

    fn valid_payload() -> TransactionPayload {
        TransactionPayload {
            kind: Some("income".to_owned()),
            category: Some("salary".to_owned()),
            amount: Some(Amount::Integer(5000)),
            date: Some("2024-01-15".to_owned()),
            description: None,
        }
    }

    #[test]
    fn valid_payload_passes() {
        let got = valid_payload().validate();

        assert_eq!(
            got,
            Ok(NewTransaction {
                kind: "income".to_owned(),
                category: "salary".to_owned(),
                amount: Amount::Integer(5000),
                date: "2024-01-15".to_owned(),
                description: None,
            })
        );
    }

    #[test]
    fn zero_amount_is_missing() {
        for amount in [Amount::Integer(0), Amount::Real(0.0)] {
            let payload = TransactionPayload {
                amount: Some(amount),
                ..valid_payload()
            };

            assert_eq!(payload.validate(), Err(Error::missing_fields()));
        }
    }

    #[test]
    fn empty_strings_are_missing() {
        let payloads = [
            TransactionPayload {
                kind: Some(String::new()),
                ..valid_payload()
            },
            TransactionPayload {
                category: Some(String::new()),
                ..valid_payload()
            },
            TransactionPayload {
                date: Some(String::new()),
                ..valid_payload()
            },
        ];

        for payload in payloads {
            assert_eq!(payload.validate(), Err(Error::missing_fields()));
        }
    }

    #[test]
    fn absent_fields_are_missing() {
        let payloads = [
            TransactionPayload {
                kind: None,
                ..valid_payload()
            },
            TransactionPayload {
                category: None,
                ..valid_payload()
            },
            TransactionPayload {
                amount: None,
                ..valid_payload()
            },
            TransactionPayload {
                date: None,
                ..valid_payload()
            },
        ];

        for payload in payloads {
            assert_eq!(payload.validate(), Err(Error::missing_fields()));
        }
    }

    #[test]
    fn empty_description_is_kept() {
        let payload = TransactionPayload {
            description: Some(String::new()),
            ..valid_payload()
        };

        let got = payload.validate().unwrap();

        assert_eq!(got.description, Some(String::new()));
    }

    #[test]
    fn negative_amount_is_allowed() {
        let payload = TransactionPayload {
            amount: Some(Amount::Real(-3.5)),
            ..valid_payload()
        };

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn parses_json_with_nulls_and_missing_fields() {
        let payload: TransactionPayload = serde_json::from_value(json!({
            "type": "expense",
            "category": null,
            "amount": 12.5,
        }))
        .unwrap();

        assert_eq!(
            payload,
            TransactionPayload {
                kind: Some("expense".to_owned()),
                category: None,
                amount: Some(Amount::Real(12.5)),
                date: None,
                description: None,
            }
        );
    }
}
