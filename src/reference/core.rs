use common::{NamedRecord, ReferenceKind};
use rusqlite::{Connection, Row};

use crate::Error;

/// The table holding records of `kind`.
fn table_name(kind: ReferenceKind) -> &'static str {
    match kind {
        ReferenceKind::Category => "categorias",
        ReferenceKind::Account => "contas",
    }
}

pub fn create_reference_tables(connection: &Connection) -> Result<(), rusqlite::Error> {
    for kind in [ReferenceKind::Category, ReferenceKind::Account] {
        connection.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    nome TEXT NOT NULL UNIQUE
                )",
                table_name(kind)
            ),
            (),
        )?;
    }

    Ok(())
}

pub fn map_row_to_reference(row: &Row) -> Result<NamedRecord, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;

    Ok(NamedRecord { id, name })
}

/// Every record of `kind`, ordered by name.
///
/// # Errors
/// Returns an [Error::SqlError] if the query fails.
pub fn get_references(kind: ReferenceKind, connection: &Connection) -> Result<Vec<NamedRecord>, Error> {
    connection
        .prepare(&format!(
            "SELECT id, nome FROM {} ORDER BY nome COLLATE NOCASE, id",
            table_name(kind)
        ))?
        .query_map([], map_row_to_reference)?
        .map(|maybe_record| maybe_record.map_err(Error::from))
        .collect()
}

/// Create a record of `kind` named `name`, with surrounding whitespace removed.
///
/// # Errors
/// This function will return a:
/// - [Error::EmptyName] if `name` is blank,
/// - [Error::DuplicateName] if a record of the same kind already has the name,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_reference(
    kind: ReferenceKind,
    name: &str,
    connection: &Connection,
) -> Result<NamedRecord, Error> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }

    connection
        .prepare(&format!(
            "INSERT INTO {} (nome) VALUES (?1) RETURNING id, nome",
            table_name(kind)
        ))?
        .query_row([name], map_row_to_reference)
        .map_err(|error| match error {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: _,
                    extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
                },
                _,
            ) => Error::DuplicateName(name.to_owned()),
            error => error.into(),
        })
}
