#![allow(missing_docs)]

use axum::{body::Body, response::Response};
use axum_test::TestServer;
use rusqlite::Connection;
use serde::de::DeserializeOwned;

use crate::{
    AppState, Error, build_router,
    stores::{RowsAffected, TransactionStore, sqlite::SQLiteTransactionStore},
    summary::{SummaryFilter, TypeTotal},
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// A store where every operation fails as if the database were unavailable.
#[derive(Debug, Clone)]
pub(crate) struct FailingTransactionStore;

impl FailingTransactionStore {
    pub(crate) const MESSAGE: &str = "disk I/O error";

    fn error() -> Error {
        Error::StoreFailure(Self::MESSAGE.to_owned())
    }
}

impl TransactionStore for FailingTransactionStore {
    fn create_many(&self, _: &[NewTransaction]) -> Result<RowsAffected, Error> {
        Err(Self::error())
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        Err(Self::error())
    }

    fn get(&self, _: TransactionId) -> Result<Option<Transaction>, Error> {
        Err(Self::error())
    }

    fn update(&self, _: TransactionId, _: &NewTransaction) -> Result<RowsAffected, Error> {
        Err(Self::error())
    }

    fn delete(&self, _: TransactionId) -> Result<RowsAffected, Error> {
        Err(Self::error())
    }

    fn totals_by_type(&self, _: &SummaryFilter) -> Result<Vec<TypeTotal>, Error> {
        Err(Self::error())
    }
}

#[track_caller]
pub(crate) fn must_create_test_state() -> AppState<SQLiteTransactionStore> {
    let connection =
        Connection::open_in_memory().expect("Could not open database in memory.");
    AppState::from_connection(connection).expect("Could not initialize database.")
}

#[track_caller]
pub(crate) fn must_create_test_server<S>(state: AppState<S>) -> TestServer
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

pub(crate) async fn must_read_body(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body.")
        .to_vec()
}

pub(crate) async fn must_read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = must_read_body(response).await;
    serde_json::from_slice(&body).expect("Could not parse response body as JSON.")
}

pub(crate) async fn must_read_text(response: Response<Body>) -> String {
    let body = must_read_body(response).await;
    String::from_utf8(body).expect("Response body is not valid UTF-8.")
}
