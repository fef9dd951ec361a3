//! Route paths for the shell, the client bundle and the JSON API.

/// The root route which serves the HTML shell for the client.
pub const ROOT: &str = "/";
/// The route for the compiled client (`wasm-pack` output).
pub const PKG: &str = "/pkg";
/// The script the shell imports to start the client.
pub const CLIENT_SCRIPT: &str = "/pkg/frontend.js";

/// The route to list or create categories.
pub const CATEGORIES_API: &str = "/api/categorias";
/// The route to list or create accounts.
pub const ACCOUNTS_API: &str = "/api/contas";
/// The route to list or create transactions.
pub const TRANSACTIONS_API: &str = "/api/transacoes";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/api/transacoes/{transaction_id}";

/// Fill the `{...}` placeholder in `endpoint_path` with `id`.
///
/// Paths without a placeholder come back unchanged.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
