//! Types shared by the finance tracker server and its browser client.
//!
//! The field names on the wire are Portuguese (`descricao`, `valor`, ...) so
//! the structs here carry `serde` renames; the Rust side uses English names.

#![warn(missing_docs)]

mod balance;
mod error_body;
mod format;
mod reference;
mod transaction;

pub use balance::{Balance, compute_balance};
pub use error_body::{DeleteConfirmation, ErrorBody};
pub use format::{format_currency, format_date, format_signed_amount, parse_iso_date};
pub use reference::{NamedRecord, NewReference, ReferenceKind};
pub use transaction::{ParseKindError, Transaction, TransactionKind, TransactionPayload};

/// Alias for the integer type used for server-assigned record IDs.
pub type RecordId = i64;
