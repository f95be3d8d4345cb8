//! Implements the stores using SQLite.

mod transaction;

pub use transaction::{MAX_ROWS_PER_STATEMENT, SQLiteTransactionStore};
