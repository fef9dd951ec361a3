//! Defines the endpoints for listing and creating categories and accounts.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};
use common::{NamedRecord, NewReference, ReferenceKind};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    reference::core::{create_reference, get_references},
};

/// The state needed to list or create categories and accounts.
#[derive(Debug, Clone)]
pub struct ReferenceState {
    /// The database connection for managing categories and accounts.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ReferenceState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

fn list(kind: ReferenceKind, state: &ReferenceState) -> Result<Json<Vec<NamedRecord>>, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("Could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    get_references(kind, &connection).map(Json)
}

fn create(
    kind: ReferenceKind,
    state: &ReferenceState,
    payload: Result<Json<NewReference>, JsonRejection>,
) -> Result<(StatusCode, Json<NamedRecord>), Error> {
    let Json(new_reference) =
        payload.map_err(|rejection| Error::InvalidJson(rejection.body_text()))?;

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("Could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let record = create_reference(kind, &new_reference.name, &connection).inspect_err(|error| {
        tracing::debug!("Could not create {} {new_reference:?}: {error}", kind.noun());
    })?;

    tracing::info!("Created {} {} \"{}\"", kind.noun(), record.id, record.name);

    Ok((StatusCode::CREATED, Json(record)))
}

/// A route handler for listing every category, ordered by name.
pub async fn list_categories_endpoint(
    State(state): State<ReferenceState>,
) -> Result<Json<Vec<NamedRecord>>, Error> {
    list(ReferenceKind::Category, &state)
}

/// A route handler for listing every account, ordered by name.
pub async fn list_accounts_endpoint(
    State(state): State<ReferenceState>,
) -> Result<Json<Vec<NamedRecord>>, Error> {
    list(ReferenceKind::Account, &state)
}

/// A route handler for creating a category, responds with the new record.
pub async fn create_category_endpoint(
    State(state): State<ReferenceState>,
    payload: Result<Json<NewReference>, JsonRejection>,
) -> Result<(StatusCode, Json<NamedRecord>), Error> {
    create(ReferenceKind::Category, &state, payload)
}

/// A route handler for creating an account, responds with the new record.
pub async fn create_account_endpoint(
    State(state): State<ReferenceState>,
    payload: Result<Json<NewReference>, JsonRejection>,
) -> Result<(StatusCode, Json<NamedRecord>), Error> {
    create(ReferenceKind::Account, &state, payload)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State, http::StatusCode};
    use common::{NamedRecord, NewReference};
    use rusqlite::Connection;

    use crate::{Error, db::initialize};

    use super::{
        ReferenceState, create_account_endpoint, create_category_endpoint,
        list_categories_endpoint,
    };

    fn get_test_state() -> ReferenceState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        ReferenceState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn new_reference(name: &str) -> Result<Json<NewReference>, axum::extract::rejection::JsonRejection> {
        Ok(Json(NewReference {
            name: name.to_owned(),
        }))
    }

    #[tokio::test]
    async fn can_create_category() {
        let state = get_test_state();

        let (status, Json(record)) =
            create_category_endpoint(State(state.clone()), new_reference("Food"))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            record,
            NamedRecord {
                id: 1,
                name: "Food".to_owned()
            }
        );

        let Json(categories) = list_categories_endpoint(State(state)).await.unwrap();
        assert_eq!(categories, vec![record]);
    }

    #[tokio::test]
    async fn duplicate_account_is_rejected() {
        let state = get_test_state();
        create_account_endpoint(State(state.clone()), new_reference("Wallet"))
            .await
            .unwrap();

        let got = create_account_endpoint(State(state), new_reference("Wallet")).await;

        assert_eq!(got.unwrap_err(), Error::DuplicateName("Wallet".to_owned()));
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let state = get_test_state();

        let got = create_category_endpoint(State(state), new_reference("  ")).await;

        assert_eq!(got.unwrap_err(), Error::EmptyName);
    }
}
