//! Parsing and validation of transaction request bodies.
//!
//! Request bodies are first parsed into the loosely typed [TransactionInput],
//! where every field may be missing, and then validated into a
//! [NewTransaction]. Anything that does not survive both steps is rejected
//! before it reaches the store.

use serde::Deserialize;
use serde_json::Value;

use crate::{Error, transaction::NewTransaction};

/// A transaction as sent by a client, before validation.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct TransactionInput {
    /// The kind of transaction, normally "income" or "expense".
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// What the money was for.
    pub category: Option<String>,
    /// The amount of money spent or earned.
    pub amount: Option<f64>,
    /// When the transaction happened.
    pub date: Option<String>,
    /// Optional free text about the transaction.
    pub description: Option<String>,
}

impl TransactionInput {
    /// Check that `type`, `category`, `amount` and `date` are all present and
    /// non-empty, i.e. that [TransactionInput::validate] would succeed.
    pub fn is_valid(&self) -> bool {
        self.clone().validate().is_ok()
    }

    /// Convert the input into a [NewTransaction].
    ///
    /// An amount of zero counts as missing, so zero-value transactions are
    /// rejected. The description is optional and is not checked.
    ///
    /// # Errors
    /// Returns [Error::MissingFields] if any required field is missing or empty.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        match self {
            TransactionInput {
                type_: Some(type_),
                category: Some(category),
                amount: Some(amount),
                date: Some(date),
                description,
            } if !type_.is_empty() && !category.is_empty() && amount != 0.0 && !date.is_empty() => {
                Ok(NewTransaction {
                    type_,
                    category,
                    amount,
                    date,
                    description,
                })
            }
            _ => Err(Error::MissingFields),
        }
    }
}

/// Parse the body of a bulk insert request into validated transactions.
///
/// # Errors
/// This function will return a:
/// - [Error::NotAnArray] if the body is empty or is JSON but not an array,
/// - [Error::EmptyBatch] if the array is empty,
/// - [Error::MissingFields] if any element fails validation,
/// - or [Error::MalformedBody] if the body is not JSON or a field has the wrong JSON type.
pub fn parse_transaction_batch(body: &[u8]) -> Result<Vec<NewTransaction>, Error> {
    if body.trim_ascii().is_empty() {
        return Err(Error::NotAnArray);
    }

    let Value::Array(items) = serde_json::from_slice::<Value>(body)? else {
        return Err(Error::NotAnArray);
    };

    if items.is_empty() {
        return Err(Error::EmptyBatch);
    }

    items.into_iter().map(parse_transaction_value).collect()
}

/// Parse the body of a single transaction request, e.g. an update.
///
/// # Errors
/// This function will return a:
/// - [Error::MissingFields] if the body is empty, not a JSON object, or fails validation,
/// - or [Error::MalformedBody] if the body is not JSON or a field has the wrong JSON type.
pub fn parse_transaction(body: &[u8]) -> Result<NewTransaction, Error> {
    if body.trim_ascii().is_empty() {
        return Err(Error::MissingFields);
    }

    parse_transaction_value(serde_json::from_slice(body)?)
}

fn parse_transaction_value(value: Value) -> Result<NewTransaction, Error> {
    if !value.is_object() {
        return Err(Error::MissingFields);
    }

    serde_json::from_value::<TransactionInput>(value)?.validate()
}

#[cfg(test)]
mod validate_tests {
    use crate::{Error, transaction::NewTransaction};

    use super::TransactionInput;

    fn valid_input() -> TransactionInput {
        TransactionInput {
            type_: Some("expense".to_owned()),
            category: Some("food".to_owned()),
            amount: Some(12.5),
            date: Some("2024-01-15".to_owned()),
            description: None,
        }
    }

    #[test]
    fn accepts_complete_input() {
        let got = valid_input().validate();

        assert_eq!(
            got,
            Ok(NewTransaction::build("expense", "food", 12.5, "2024-01-15"))
        );
    }

    #[test]
    fn keeps_description() {
        let input = TransactionInput {
            description: Some("lunch".to_owned()),
            ..valid_input()
        };

        let got = input.validate().unwrap();

        assert_eq!(got.description.as_deref(), Some("lunch"));
    }

    #[test]
    fn accepts_negative_amount_and_unknown_type() {
        let input = TransactionInput {
            type_: Some("transfer".to_owned()),
            amount: Some(-3.0),
            ..valid_input()
        };

        assert!(input.is_valid());
    }

    #[test]
    fn rejects_missing_fields() {
        let cases = [
            TransactionInput {
                type_: None,
                ..valid_input()
            },
            TransactionInput {
                category: None,
                ..valid_input()
            },
            TransactionInput {
                amount: None,
                ..valid_input()
            },
            TransactionInput {
                date: None,
                ..valid_input()
            },
        ];

        for input in cases {
            assert!(!input.is_valid(), "want {input:?} to be invalid");
            assert_eq!(input.validate(), Err(Error::MissingFields));
        }
    }

    #[test]
    fn rejects_empty_strings() {
        let cases = [
            TransactionInput {
                type_: Some(String::new()),
                ..valid_input()
            },
            TransactionInput {
                category: Some(String::new()),
                ..valid_input()
            },
            TransactionInput {
                date: Some(String::new()),
                ..valid_input()
            },
        ];

        for input in cases {
            assert!(!input.is_valid(), "want {input:?} to be invalid");
            assert_eq!(input.validate(), Err(Error::MissingFields));
        }
    }

    #[test]
    fn rejects_zero_amount() {
        let input = TransactionInput {
            amount: Some(0.0),
            ..valid_input()
        };

        assert!(!input.is_valid());
        assert_eq!(input.validate(), Err(Error::MissingFields));
    }
}
