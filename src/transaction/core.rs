//! Storage for transactions.

use common::{RecordId, Transaction, TransactionKind, TransactionPayload};
use rusqlite::{Connection, Row, types::Type};

use crate::Error;

/// Selects every column of [Transaction], with the referenced names joined in.
const SELECT_TRANSACTION: &str = "SELECT t.id, t.descricao, t.valor, t.data, t.tipo,
        t.categoria_id, t.conta_id, c.nome, a.nome
    FROM transacoes t
    LEFT JOIN categorias c ON c.id = t.categoria_id
    LEFT JOIN contas a ON a.id = t.conta_id";

pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transacoes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            descricao TEXT NOT NULL,
            valor REAL NOT NULL,
            data TEXT NOT NULL,
            tipo TEXT NOT NULL CHECK(tipo IN ('receita', 'despesa')),
            categoria_id INTEGER,
            conta_id INTEGER,
            FOREIGN KEY(categoria_id) REFERENCES categorias(id) ON DELETE SET NULL,
            FOREIGN KEY(conta_id) REFERENCES contas(id) ON DELETE SET NULL
        )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transacoes_data ON transacoes(data DESC, id DESC)",
        (),
    )?;

    Ok(())
}

/// Map a row selected with [SELECT_TRANSACTION] to a [Transaction].
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let description = row.get(1)?;
    let amount = row.get(2)?;
    let date = row.get(3)?;
    let kind: String = row.get(4)?;
    let category_id = row.get(5)?;
    let account_id = row.get(6)?;
    let category_name = row.get(7)?;
    let account_name = row.get(8)?;

    let kind = kind
        .parse::<TransactionKind>()
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(error)))?;

    Ok(Transaction {
        id,
        description,
        amount,
        date,
        kind,
        category_id,
        account_id,
        category_name,
        account_name,
    })
}

/// Check the fields of `payload` that the schema cannot, trimming the description.
///
/// # Errors
/// Returns [Error::EmptyDescription] for a blank description and
/// [Error::InvalidAmount] unless the amount is a finite number above zero.
pub fn validate_payload(payload: TransactionPayload) -> Result<TransactionPayload, Error> {
    let description = payload.description.trim();
    if description.is_empty() {
        return Err(Error::EmptyDescription);
    }

    if !payload.amount.is_finite() || payload.amount <= 0.0 {
        return Err(Error::InvalidAmount);
    }

    Ok(TransactionPayload {
        description: description.to_owned(),
        ..payload
    })
}

fn map_constraint_error(error: rusqlite::Error) -> Error {
    match error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code: _,
                extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            },
            _,
        ) => Error::InvalidReference,
        error => error.into(),
    }
}

/// Every transaction, newest date first and, within a date, newest record first.
///
/// # Errors
/// Returns an [Error::SqlError] if the query fails.
pub fn get_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!("{SELECT_TRANSACTION} ORDER BY t.data DESC, t.id DESC"))?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: RecordId, connection: &Connection) -> Result<Transaction, Error> {
    connection
        .prepare(&format!("{SELECT_TRANSACTION} WHERE t.id = :id"))?
        .query_row(&[(":id", &id)], map_transaction_row)
        .map_err(Error::from)
}

/// Create a new transaction in the database from a validated `payload`.
///
/// # Errors
/// This function will return a:
/// - [Error::EmptyDescription] or [Error::InvalidAmount] if `payload` is invalid,
/// - [Error::InvalidReference] if the category or account does not exist,
/// - or [Error::SqlError] there is some other SQL error.
pub fn create_transaction(
    payload: TransactionPayload,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let payload = validate_payload(payload)?;

    let id: RecordId = connection
        .prepare(
            "INSERT INTO transacoes (descricao, valor, data, tipo, categoria_id, conta_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id",
        )?
        .query_row(
            (
                &payload.description,
                payload.amount,
                payload.date,
                payload.kind.as_str(),
                payload.category_id,
                payload.account_id,
            ),
            |row| row.get(0),
        )
        .map_err(map_constraint_error)?;

    get_transaction(id, connection)
}

/// Replace every field of the transaction `id` with `payload`.
///
/// # Errors
/// This function will return a:
/// - [Error::EmptyDescription] or [Error::InvalidAmount] if `payload` is invalid,
/// - [Error::UpdateMissingTransaction] if `id` does not refer to a transaction,
/// - [Error::InvalidReference] if the category or account does not exist,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_transaction(
    id: RecordId,
    payload: TransactionPayload,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let payload = validate_payload(payload)?;

    let rows_affected = connection
        .execute(
            "UPDATE transacoes
             SET descricao = ?1, valor = ?2, data = ?3, tipo = ?4, categoria_id = ?5, conta_id = ?6
             WHERE id = ?7",
            (
                &payload.description,
                payload.amount,
                payload.date,
                payload.kind.as_str(),
                payload.category_id,
                payload.account_id,
                id,
            ),
        )
        .map_err(map_constraint_error)?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingTransaction);
    }

    get_transaction(id, connection)
}

/// Delete the transaction `id`.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if `id` does not refer to a
/// transaction, or [Error::SqlError] for any other SQL error.
pub fn delete_transaction(id: RecordId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM transacoes WHERE id = :id", &[(":id", &id)])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
