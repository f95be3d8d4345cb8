//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    stores::{TransactionStore, sqlite::SQLiteTransactionStore},
};

/// The state of the REST server.
///
/// Route handlers receive the store through this state rather than reaching
/// for a global connection, so any [TransactionStore] can back the server.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: TransactionStore,
{
    /// The store for managing [transactions](crate::transaction::Transaction).
    pub transaction_store: S,
}

impl<S> AppState<S>
where
    S: TransactionStore,
{
    /// Create a new [AppState] around an existing store.
    pub fn new(transaction_store: S) -> Self {
        Self { transaction_store }
    }
}

impl AppState<SQLiteTransactionStore> {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for
    /// the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn from_connection(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self::new(SQLiteTransactionStore::new(connection)))
    }
}
