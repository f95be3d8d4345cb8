//! Defines the endpoint for summarising income and expenses.
use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    stores::TransactionStore,
    summary::{Summary, SummaryFilter},
};

/// A route handler for the total income, total expenses and balance of the
/// transactions matching the optional `category`, `startDate` and `endDate`
/// query parameters.
///
/// All three totals are zero when nothing matches.
pub async fn get_summary_endpoint<S>(
    State(state): State<AppState<S>>,
    Query(filter): Query<SummaryFilter>,
) -> Response
where
    S: TransactionStore,
{
    match state.transaction_store.totals_by_type(&filter) {
        Ok(totals) => Json(Summary::from_totals(totals)).into_response(),
        Err(error) => {
            tracing::error!("Could not summarise transactions: {error}");
            error.into_response()
        }
    }
}
