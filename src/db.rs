//! Sets up the SQLite schema.

use rusqlite::Connection;

use crate::{Error, reference::create_reference_tables, transaction::create_transaction_table};

/// Enable foreign key enforcement and create any missing tables.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an [Error::SqlError] if any of the statements fail.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    // Foreign keys are off by default and the setting is per connection.
    connection.pragma_update(None, "foreign_keys", true)?;

    let transaction = rusqlite::Transaction::new_unchecked(
        connection,
        rusqlite::TransactionBehavior::Exclusive,
    )?;

    create_reference_tables(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
