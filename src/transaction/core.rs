//! Defines the core data models and table schema for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// The transaction type for money earned.
pub const INCOME: &str = "income";
/// The transaction type for money spent.
pub const EXPENSE: &str = "expense";

/// The columns selected when reading a [Transaction], in the order expected by
/// [map_transaction_row].
pub(crate) const TRANSACTION_COLUMNS: &str = "id, type, category, amount, date, description";

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income that has been stored, i.e. an event where money was
/// either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID assigned by the store.
    pub id: TransactionId,
    /// The kind of transaction, normally [INCOME] or [EXPENSE].
    #[serde(rename = "type")]
    pub type_: String,
    /// What the money was for, e.g. "salary" or "food".
    pub category: String,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// When the transaction happened.
    ///
    /// Dates are compared as strings, so they should be in a sortable format
    /// such as ISO 8601 (`2024-01-31`).
    pub date: String,
    /// Optional free text about the transaction.
    pub description: Option<String>,
}

/// A transaction that has passed validation and is ready to be written to the
/// store.
///
/// Create one with [NewTransaction::build] or by validating a
/// [TransactionInput](crate::transaction::TransactionInput).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The kind of transaction, normally [INCOME] or [EXPENSE].
    pub type_: String,
    /// What the money was for.
    pub category: String,
    /// The amount of money spent or earned, never zero.
    pub amount: f64,
    /// When the transaction happened.
    pub date: String,
    /// Optional free text about the transaction.
    pub description: Option<String>,
}

impl NewTransaction {
    /// Create a new transaction without a description.
    ///
    /// The caller is responsible for passing non-empty strings and a non-zero
    /// amount; input from clients should go through
    /// [TransactionInput::validate](crate::transaction::TransactionInput::validate)
    /// instead.
    pub fn build(type_: &str, category: &str, amount: f64, date: &str) -> Self {
        Self {
            type_: type_.to_owned(),
            category: category.to_owned(),
            amount,
            date: date.to_owned(),
            description: None,
        }
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    // Used by the summary query, which filters on date and category.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_date_category ON transactions(date, category);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
///
/// The row must contain the columns listed in [TRANSACTION_COLUMNS].
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let type_ = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;
    let description = row.get(5)?;

    Ok(Transaction {
        id,
        type_,
        category,
        amount,
        date,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================
