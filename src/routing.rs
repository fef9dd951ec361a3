//! Application router configuration.

use std::path::Path;

use axum::{
    Router, middleware,
    routing::{get, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    html::get_shell_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
    reference::{
        create_account_endpoint, create_category_endpoint, list_accounts_endpoint,
        list_categories_endpoint,
    },
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
        update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// `pkg_dir` is the directory holding the compiled client, served under [endpoints::PKG].
/// Request and response logging covers the API routes only.
pub fn build_router(state: AppState, pkg_dir: &Path) -> Router {
    let api_routes = Router::new()
        .route(
            endpoints::CATEGORIES_API,
            get(list_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::ACCOUNTS_API,
            get(list_accounts_endpoint).post(create_account_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .layer(middleware::from_fn(logging_middleware));

    Router::new()
        .route(endpoints::ROOT, get(get_shell_page))
        .merge(api_routes)
        .nest_service(endpoints::PKG, ServeDir::new(pkg_dir))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{DeleteConfirmation, ErrorBody, NamedRecord, Transaction};
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, endpoints, endpoints::format_endpoint};

    use super::build_router;

    fn get_test_server() -> TestServer {
        let state = AppState::new(Connection::open_in_memory().unwrap()).unwrap();
        let app = build_router(state, Path::new("frontend/pkg"));

        TestServer::new(app)
    }

    fn transaction_body(description: &str) -> serde_json::Value {
        json!({
            "descricao": description,
            "valor": 100.0,
            "data": "2025-05-20",
            "tipo": "receita",
            "categoria_id": null,
            "conta_id": null
        })
    }

    #[tokio::test]
    async fn root_serves_shell() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        assert!(response.text().contains(endpoints::CLIENT_SCRIPT));
    }

    #[tokio::test]
    async fn serves_client_bytes_unchanged() {
        let wasm: [u8; 12] = [0, 97, 115, 109, 1, 0, 0, 0, 255, 128, 195, 40];
        let pkg_dir = std::env::temp_dir().join(format!("finance_tracker_pkg_{}", std::process::id()));
        fs::create_dir_all(&pkg_dir).unwrap();
        fs::write(pkg_dir.join("frontend_bg.wasm"), wasm).unwrap();
        let state = AppState::new(Connection::open_in_memory().unwrap()).unwrap();
        let server = TestServer::new(build_router(state, &pkg_dir));

        let response = server.get("/pkg/frontend_bg.wasm").await;

        fs::remove_dir_all(&pkg_dir).unwrap();
        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), wasm);
    }

    #[tokio::test]
    async fn create_and_list_categories() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CATEGORIES_API)
            .json(&json!({"nome": "Food"}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let created = response.json::<NamedRecord>();
        assert_eq!(created.name, "Food");

        let listed = server
            .get(endpoints::CATEGORIES_API)
            .await
            .json::<Vec<NamedRecord>>();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn duplicate_account_is_conflict_with_message() {
        let server = get_test_server();
        server
            .post(endpoints::ACCOUNTS_API)
            .json(&json!({"nome": "Wallet"}))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post(endpoints::ACCOUNTS_API)
            .json(&json!({"nome": "Wallet"}))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(
            response.json::<ErrorBody>().message,
            "\"Wallet\" already exists"
        );
    }

    #[tokio::test]
    async fn transaction_lifecycle() {
        let server = get_test_server();

        let created = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&transaction_body("Salary"))
            .await;
        created.assert_status(StatusCode::CREATED);
        let created = created.json::<Transaction>();

        let updated = server
            .put(&format_endpoint(endpoints::TRANSACTION, created.id))
            .json(&transaction_body("Bonus"))
            .await;
        updated.assert_status_ok();
        assert_eq!(updated.json::<Transaction>().description, "Bonus");

        let deleted = server
            .delete(&format_endpoint(endpoints::TRANSACTION, created.id))
            .await;
        deleted.assert_status_ok();
        assert_eq!(
            deleted.json::<DeleteConfirmation>().message,
            "Transaction deleted successfully"
        );

        let listed = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request_with_message() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({"descricao": "Missing everything else"}))
            .await;

        response.assert_status_bad_request();
        assert!(
            response
                .json::<ErrorBody>()
                .message
                .starts_with("Invalid request body")
        );
    }

    #[tokio::test]
    async fn non_positive_amount_is_bad_request() {
        let server = get_test_server();
        let mut body = transaction_body("Refund");
        body["valor"] = json!(-5);

        let response = server.post(endpoints::TRANSACTIONS_API).json(&body).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<ErrorBody>().message,
            "The amount must be a number greater than zero"
        );
    }

    #[tokio::test]
    async fn updating_missing_transaction_is_not_found() {
        let server = get_test_server();

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, 404))
            .json(&transaction_body("Ghost"))
            .await;

        response.assert_status_not_found();
        assert_eq!(response.json::<ErrorBody>().message, "Transaction not found");
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let server = get_test_server();

        let response = server.get("/api/nope").await;

        response.assert_status_not_found();
        assert!(!response.json::<ErrorBody>().message.is_empty());
    }
}
