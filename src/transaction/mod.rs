//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validated `NewTransaction`
//! - Parsing and validation of request bodies
//! - Route handlers for creating, listing, getting, editing and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod input;
mod list_endpoint;

pub use core::{
    EXPENSE, INCOME, NewTransaction, Transaction, TransactionId, create_transaction_table,
    map_transaction_row,
};
pub use create_endpoint::{InsertedCount, create_transactions_endpoint};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::{ChangeCount, edit_transaction_endpoint};
pub use get_endpoint::get_transaction_endpoint;
pub use input::{TransactionInput, parse_transaction, parse_transaction_batch};
pub use list_endpoint::list_transactions_endpoint;

pub(crate) use core::TRANSACTION_COLUMNS;
