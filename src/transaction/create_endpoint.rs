//! Defines the endpoint for creating transactions in bulk.
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    stores::{RowsAffected, TransactionStore},
    transaction::parse_transaction_batch,
};

/// The response body for a successful bulk insert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsertedCount {
    /// The number of rows the store reported as inserted.
    pub inserted: RowsAffected,
}

/// A route handler for inserting a JSON array of transactions, responds with
/// the number of rows inserted.
///
/// Every transaction is validated before anything is written, so one invalid
/// transaction rejects the whole request.
pub async fn create_transactions_endpoint<S>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Response
where
    S: TransactionStore,
{
    let transactions = match parse_transaction_batch(&body) {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::debug!("Rejected bulk insert: {error}");
            return error.into_response();
        }
    };

    match state.transaction_store.create_many(&transactions) {
        Ok(inserted) => (StatusCode::CREATED, Json(InsertedCount { inserted })).into_response(),
        Err(error) => {
            tracing::error!(
                "Could not insert {} transactions: {error}",
                transactions.len()
            );
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Bytes, extract::State, http::StatusCode};

    use crate::{
        AppState,
        stores::TransactionStore,
        test_utils::{
            FailingTransactionStore, must_create_test_state, must_read_json, must_read_text,
        },
        transaction::Transaction,
    };

    use super::{InsertedCount, create_transactions_endpoint};

    const TWO_TRANSACTIONS: &str = r#"[
        {"type": "income", "category": "salary", "amount": 1000, "date": "2024-01-01"},
        {"type": "expense", "category": "food", "amount": 200, "date": "2024-01-15", "description": "groceries"}
    ]"#;

    #[tokio::test]
    async fn can_create_transactions() {
        let state = must_create_test_state();

        let response =
            create_transactions_endpoint(State(state.clone()), Bytes::from(TWO_TRANSACTIONS))
                .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            must_read_json::<InsertedCount>(response).await,
            InsertedCount { inserted: 2 }
        );
        let transactions = state.transaction_store.get_all().unwrap();
        assert_eq!(
            transactions[1],
            Transaction {
                id: 2,
                type_: "expense".to_owned(),
                category: "food".to_owned(),
                amount: 200.0,
                date: "2024-01-15".to_owned(),
                description: Some("groceries".to_owned()),
            }
        );
    }

    #[tokio::test]
    async fn rejects_object_body() {
        let state = must_create_test_state();
        let body = r#"{"type": "income", "category": "salary", "amount": 1000, "date": "2024-01-01"}"#;

        let response = create_transactions_endpoint(State(state.clone()), Bytes::from(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            must_read_text(response).await,
            "Input must be an array of transactions"
        );
        assert_eq!(state.transaction_store.get_all().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn rejects_whole_batch_when_one_is_invalid() {
        let state = must_create_test_state();
        let body = r#"[
            {"type": "income", "category": "salary", "amount": 1000, "date": "2024-01-01"},
            {"type": "expense", "amount": 200, "date": "2024-01-15"}
        ]"#;

        let response = create_transactions_endpoint(State(state.clone()), Bytes::from(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(must_read_text(response).await, "All fields are required");
        assert_eq!(state.transaction_store.get_all().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn store_failure_is_500_with_message() {
        let state = AppState::new(FailingTransactionStore);

        let response =
            create_transactions_endpoint(State(state), Bytes::from(TWO_TRANSACTIONS)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            must_read_text(response).await,
            FailingTransactionStore::MESSAGE
        );
    }
}
