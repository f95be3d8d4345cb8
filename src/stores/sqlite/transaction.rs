//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, params, params_from_iter, types::Value};

use crate::{
    Error,
    stores::{RowsAffected, TransactionStore},
    summary::{SummaryFilter, TypeTotal},
    transaction::{
        NewTransaction, TRANSACTION_COLUMNS, Transaction, TransactionId, map_transaction_row,
    },
};

/// The largest number of rows written by a single `INSERT` statement.
///
/// Each row binds five parameters, and SQLite limits the number of bound
/// parameters per statement. Larger batches are split into several statements
/// that run inside one SQL transaction.
pub const MAX_ROWS_PER_STATEMENT: usize = 1000;

/// Stores transactions in a SQLite database.
///
/// The `transactions` table must already exist, see
/// [initialize](crate::initialize_db).
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Insert the transactions with one multi-row `INSERT`.
    ///
    /// Batches larger than [MAX_ROWS_PER_STATEMENT] are split across several
    /// statements inside a single SQL transaction, so either every row is
    /// inserted or none are.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the connection lock is poisoned,
    /// - or [Error::StoreFailure] if there is an SQL error (e.g. a constraint violation).
    fn create_many(&self, transactions: &[NewTransaction]) -> Result<RowsAffected, Error> {
        let mut connection = self.lock()?;

        if transactions.len() <= MAX_ROWS_PER_STATEMENT {
            return insert_rows(transactions, &connection);
        }

        let sql_transaction = connection.transaction()?;
        let mut inserted = 0;

        for chunk in transactions.chunks(MAX_ROWS_PER_STATEMENT) {
            inserted += insert_rows(chunk, &sql_transaction)?;
        }

        sql_transaction.commit()?;

        Ok(inserted)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.lock()?;
        let mut statement =
            connection.prepare(&format!("SELECT {TRANSACTION_COLUMNS} FROM transactions"))?;

        let transactions = statement
            .query_map([], map_transaction_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error> {
        let connection = self.lock()?;

        connection
            .prepare(&format!(
                "SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE id = :id"
            ))?
            .query_row(&[(":id", &id)], map_transaction_row)
            .optional()
            .map_err(Error::from)
    }

    fn update(
        &self,
        id: TransactionId,
        transaction: &NewTransaction,
    ) -> Result<RowsAffected, Error> {
        let connection = self.lock()?;

        connection
            .execute(
                "UPDATE transactions \
                SET \
                    type = ?1, \
                    category = ?2, \
                    amount = ?3, \
                    date = ?4, \
                    description = ?5 \
                WHERE id = ?6;",
                params![
                    transaction.type_,
                    transaction.category,
                    transaction.amount,
                    transaction.date,
                    transaction.description,
                    id,
                ],
            )
            .map_err(Error::from)
    }

    fn delete(&self, id: TransactionId) -> Result<RowsAffected, Error> {
        let connection = self.lock()?;

        connection
            .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
            .map_err(Error::from)
    }

    fn totals_by_type(&self, filter: &SummaryFilter) -> Result<Vec<TypeTotal>, Error> {
        let where_clause = filter.where_clause();
        let query = format!(
            "SELECT type, SUM(amount) AS total FROM transactions WHERE {} GROUP BY type",
            where_clause.sql
        );

        let connection = self.lock()?;
        let mut statement = connection.prepare(&query)?;

        let totals = statement
            .query_map(params_from_iter(where_clause.params), |row| {
                Ok(TypeTotal {
                    type_: row.get(0)?,
                    total: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(totals)
    }
}

fn insert_rows(
    transactions: &[NewTransaction],
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    if transactions.is_empty() {
        return Ok(0);
    }

    let placeholders = vec!["(?, ?, ?, ?, ?)"; transactions.len()].join(", ");
    let query = format!(
        "INSERT INTO transactions (type, category, amount, date, description) VALUES {placeholders}"
    );

    let params = transactions.iter().flat_map(|transaction| {
        [
            Value::Text(transaction.type_.clone()),
            Value::Text(transaction.category.clone()),
            Value::Real(transaction.amount),
            Value::Text(transaction.date.clone()),
            transaction
                .description
                .clone()
                .map_or(Value::Null, Value::Text),
        ]
    });

    connection
        .execute(&query, params_from_iter(params))
        .map_err(Error::from)
}
