//! Defines the JSON endpoints for transactions.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json,
    extract::{FromRef, Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use common::{DeleteConfirmation, RecordId, Transaction, TransactionPayload};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    transaction::core::{
        create_transaction, delete_transaction, get_transactions, update_transaction,
    },
};

/// The state needed to read and write transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

impl TransactionState {
    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection.lock().map_err(|error| {
            tracing::error!("Could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

fn read_payload(
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<TransactionPayload, Error> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| Error::InvalidJson(rejection.body_text()))
}

/// A route handler for listing every transaction, newest first.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    get_transactions(&*state.connection()?).map(Json)
}

/// A route handler for creating a new transaction, responds with the stored record.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let payload = read_payload(payload)?;

    let transaction = create_transaction(payload, &*state.connection()?).inspect_err(|error| {
        tracing::debug!("Could not create transaction: {error}");
    })?;

    tracing::info!("Created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// A route handler for replacing a transaction, responds with the updated record.
pub async fn update_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<RecordId>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<Json<Transaction>, Error> {
    let payload = read_payload(payload)?;

    let transaction = update_transaction(transaction_id, payload, &*state.connection()?)
        .inspect_err(|error| {
            tracing::debug!("Could not update transaction {transaction_id}: {error}");
        })?;

    tracing::info!("Updated transaction {transaction_id}");

    Ok(Json(transaction))
}

/// A route handler for deleting a transaction, responds with a confirmation message.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<RecordId>,
) -> Result<Json<DeleteConfirmation>, Error> {
    delete_transaction(transaction_id, &*state.connection()?).inspect_err(|error| {
        tracing::debug!("Could not delete transaction {transaction_id}: {error}");
    })?;

    tracing::info!("Deleted transaction {transaction_id}");

    Ok(Json(DeleteConfirmation {
        message: "Transaction deleted successfully".to_owned(),
    }))
}
