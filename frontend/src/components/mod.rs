//! The yew components that make up the page.

mod app;
mod balance_display;
mod reference_select;
mod select_value;
mod transaction_form;
mod transactions_table;

pub use app::App;
pub use balance_display::{BalanceDisplay, BalanceDisplayProps};
pub use reference_select::{ReferenceSelect, ReferenceSelectProps, select_id};
pub use transaction_form::{TransactionFormView, TransactionFormViewProps};
pub use transactions_table::{TransactionsTable, TransactionsTableProps};
