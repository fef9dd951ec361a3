//! Transactions: the income and expenses in the ledger.
//!
//! This module contains the database functions for storing, querying, and
//! managing transactions and the JSON endpoints built on them.

mod core;
mod endpoints;

pub use core::create_transaction_table;
pub use endpoints::{
    create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    update_transaction_endpoint,
};
