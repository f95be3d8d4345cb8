//! Defines the endpoint for getting a single transaction.
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, stores::TransactionStore, transaction::TransactionId};

/// A route handler for getting a transaction by its ID.
///
/// Responds with 200 and an empty body if there is no transaction with that
/// ID, not 404.
pub async fn get_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(transaction_id): Path<TransactionId>,
) -> Response
where
    S: TransactionStore,
{
    match state.transaction_store.get(transaction_id) {
        Ok(Some(transaction)) => Json(transaction).into_response(),
        Ok(None) => StatusCode::OK.into_response(),
        Err(error) => {
            tracing::error!("Could not get transaction {transaction_id}: {error}");
            error.into_response()
        }
    }
}
