//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    stores::TransactionStore,
    summary::get_summary_endpoint,
    transaction::{
        create_transactions_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Requests for unknown paths fall through to a plain text 404.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            post(create_transactions_endpoint::<S>).get(list_transactions_endpoint::<S>),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint::<S>)
                .put(edit_transaction_endpoint::<S>)
                .delete(delete_transaction_endpoint::<S>),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint::<S>))
        .fallback(get_404_not_found)
        .with_state(state)
}
