//! Defines the endpoint for deleting a transaction.
use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    stores::TransactionStore,
    transaction::{ChangeCount, TransactionId},
};

/// A route handler for deleting a transaction, responds with the number of
/// rows deleted.
///
/// Deleting an ID that does not exist is not an error and reports zero
/// changes.
pub async fn delete_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(transaction_id): Path<TransactionId>,
) -> Response
where
    S: TransactionStore,
{
    match state.transaction_store.delete(transaction_id) {
        Ok(changes) => Json(ChangeCount { changes }).into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_response()
        }
    }
}
