//! Defines the transaction store trait.

use crate::{
    Error,
    summary::{SummaryFilter, TypeTotal},
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// The number of rows changed by a statement.
pub type RowsAffected = usize;

/// Handles the creation, retrieval, modification and aggregation of
/// transactions.
///
/// Route handlers only talk to the store through this trait, so tests can swap
/// in a double for the SQLite implementation.
pub trait TransactionStore {
    /// Insert all of `transactions`, or none of them if any insert fails.
    ///
    /// Returns the number of rows inserted as reported by the store.
    fn create_many(&self, transactions: &[NewTransaction]) -> Result<RowsAffected, Error>;

    /// Retrieve every transaction, in whatever order the store returns them.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve a transaction by its `id`, or `None` if no row matches.
    fn get(&self, id: TransactionId) -> Result<Option<Transaction>, Error>;

    /// Replace all mutable fields of the transaction with `id`.
    ///
    /// Returns zero if `id` does not refer to a transaction.
    fn update(
        &self,
        id: TransactionId,
        transaction: &NewTransaction,
    ) -> Result<RowsAffected, Error>;

    /// Delete the transaction with `id`.
    ///
    /// Returns zero if `id` does not refer to a transaction.
    fn delete(&self, id: TransactionId) -> Result<RowsAffected, Error>;

    /// Sum the amounts of the transactions matching `filter`, grouped by type.
    ///
    /// Returns one entry per distinct type present in the matching rows.
    fn totals_by_type(&self, filter: &SummaryFilter) -> Result<Vec<TypeTotal>, Error>;
}
