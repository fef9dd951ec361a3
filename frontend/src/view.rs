//! What the page displays, computed from the state without touching the DOM.

use common::{
    Balance, NamedRecord, RecordId, Transaction, TransactionKind, compute_balance, format_date,
    format_signed_amount,
};

/// Label of the option that leaves a reference unset.
pub const NONE_OPTION_LABEL: &str = "None";
/// Text for references the server did not name.
pub const MISSING_NAME: &str = "N/A";
/// Text of the single row shown when there are no transactions.
pub const EMPTY_TABLE_MESSAGE: &str = "No transactions found.";

/// One `<option>` in a reference dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionEntry {
    /// The option's value, empty for "no selection".
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

/// The options for a reference dropdown: a disabled `placeholder`, one
/// option per item, then a [NONE_OPTION_LABEL] option with an empty value.
pub fn option_entries(items: &[NamedRecord], placeholder: &str) -> Vec<OptionEntry> {
    let mut entries = Vec::with_capacity(items.len() + 2);

    entries.push(OptionEntry {
        value: String::new(),
        label: placeholder.to_owned(),
        disabled: true,
    });

    entries.extend(items.iter().map(|item| OptionEntry {
        value: item.id.to_string(),
        label: item.name.clone(),
        disabled: false,
    }));

    entries.push(OptionEntry {
        value: String::new(),
        label: NONE_OPTION_LABEL.to_owned(),
        disabled: false,
    });

    entries
}

/// Parse the value of a reference dropdown, the empty string meaning none.
pub fn parse_option_value(value: &str) -> Option<RecordId> {
    value.parse().ok()
}

/// The CSS class for amounts of `kind`.
pub fn amount_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "receita",
        TransactionKind::Expense => "despesa",
    }
}

/// A table row, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: RecordId,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub amount_class: &'static str,
    pub kind: &'static str,
    pub category: String,
    pub account: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id,
            date: format_date(transaction.date),
            description: transaction.description.clone(),
            amount: format_signed_amount(transaction.amount, transaction.kind),
            amount_class: amount_class(transaction.kind),
            kind: transaction.kind.label(),
            category: display_name(&transaction.category_name),
            account: display_name(&transaction.account_name),
        }
    }
}

fn display_name(name: &Option<String>) -> String {
    name.as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(MISSING_NAME)
        .to_owned()
}

/// The rows for `transactions`, in the order they were fetched.
pub fn transaction_rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    transactions.iter().map(TransactionRow::from).collect()
}

/// The balance line under the table.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceView {
    pub label: String,
    pub color: &'static str,
}

impl From<Balance> for BalanceView {
    fn from(balance: Balance) -> Self {
        Self {
            label: balance.label(),
            color: balance.color(),
        }
    }
}

pub fn balance_view(transactions: &[Transaction]) -> BalanceView {
    compute_balance(transactions).into()
}
