//! Defines the endpoint for listing every transaction.
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{AppState, stores::TransactionStore};

/// A route handler for getting all transactions as a JSON array.
///
/// The order is whatever the store returns; no sorting is applied.
pub async fn list_transactions_endpoint<S>(State(state): State<AppState<S>>) -> Response
where
    S: TransactionStore,
{
    match state.transaction_store.get_all() {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => {
            tracing::error!("Could not list transactions: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};

    use crate::{
        AppState,
        stores::TransactionStore,
        test_utils::{
            FailingTransactionStore, must_create_test_state, must_read_json, must_read_text,
        },
        transaction::{NewTransaction, Transaction},
    };

    use super::list_transactions_endpoint;

    #[tokio::test]
    async fn empty_store_gives_empty_array() {
        let state = must_create_test_state();

        let response = list_transactions_endpoint(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(must_read_json::<Vec<Transaction>>(response).await, vec![]);
    }

    #[tokio::test]
    async fn lists_all_transactions() {
        let state = must_create_test_state();
        state
            .transaction_store
            .create_many(&[
                NewTransaction::build("income", "salary", 1000.0, "2024-01-01"),
                NewTransaction::build("expense", "rent", 400.0, "2024-01-02"),
                NewTransaction::build("expense", "food", 25.0, "2024-01-03"),
            ])
            .unwrap();

        let response = list_transactions_endpoint(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let transactions = must_read_json::<Vec<Transaction>>(response).await;
        let mut categories: Vec<_> = transactions
            .iter()
            .map(|transaction| transaction.category.as_str())
            .collect();
        categories.sort_unstable();
        assert_eq!(categories, vec!["food", "rent", "salary"]);
    }

    #[tokio::test]
    async fn store_failure_is_500() {
        let response = list_transactions_endpoint(State(AppState::new(FailingTransactionStore))).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            must_read_text(response).await,
            FailingTransactionStore::MESSAGE
        );
    }
}
