//! Defines the endpoint for replacing the fields of a transaction.
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    stores::{RowsAffected, TransactionStore},
    transaction::{TransactionId, parse_transaction},
};

/// The response body for updates and deletes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeCount {
    /// The number of rows changed, zero if the transaction does not exist.
    pub changes: RowsAffected,
}

/// A route handler for replacing `type`, `category`, `amount`, `date` and
/// `description` of a transaction.
///
/// The body is validated the same way as for creating transactions. An absent
/// description clears the stored one. Updating an ID that does not exist is
/// not an error and reports zero changes.
pub async fn edit_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(transaction_id): Path<TransactionId>,
    body: Bytes,
) -> Response
where
    S: TransactionStore,
{
    let transaction = match parse_transaction(&body) {
        Ok(transaction) => transaction,
        Err(error) => return error.into_response(),
    };

    match state
        .transaction_store
        .update(transaction_id, &transaction)
    {
        Ok(changes) => Json(ChangeCount { changes }).into_response(),
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            error.into_response()
        }
    }
}
