use crate::{Transaction, format::format_currency};

/// The net total of a list of transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance(pub f64);

impl Balance {
    /// Whether the balance should be shown as a surplus (zero counts).
    pub fn is_non_negative(&self) -> bool {
        self.0 >= 0.0
    }

    /// The CSS color for the balance.
    pub fn color(&self) -> &'static str {
        if self.is_non_negative() { "green" } else { "red" }
    }

    /// The balance formatted as currency, e.g. "R$ 60.00".
    pub fn label(&self) -> String {
        format_currency(self.0)
    }
}

/// Sum `transactions`, adding income and subtracting expenses, starting at zero.
pub fn compute_balance(transactions: &[Transaction]) -> Balance {
    Balance(
        transactions
            .iter()
            .fold(0.0, |total, transaction| total + transaction.signed_amount()),
    )
}
