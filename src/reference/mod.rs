//! Categories and accounts: the named records a transaction can point at.

mod core;
mod endpoints;

pub use core::create_reference_tables;
pub use endpoints::{
    create_account_endpoint, create_category_endpoint, list_accounts_endpoint,
    list_categories_endpoint,
};

#[cfg(test)]
pub use core::create_reference;
