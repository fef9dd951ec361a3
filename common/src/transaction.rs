use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::RecordId;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money earned.
    #[serde(rename = "receita")]
    Income,
    /// Money spent.
    #[serde(rename = "despesa")]
    #[default]
    Expense,
}

impl TransactionKind {
    /// The value used for this kind on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "receita",
            TransactionKind::Expense => "despesa",
        }
    }

    /// The label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    /// The amount with the sign this kind contributes to a balance.
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string was not one of the known transaction kinds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("\"{0}\" is not a valid transaction kind, expected \"receita\" or \"despesa\"")]
pub struct ParseKindError(pub String);

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receita" => Ok(TransactionKind::Income),
            "despesa" => Ok(TransactionKind::Expense),
            other => Err(ParseKindError(other.to_owned())),
        }
    }
}

/// A transaction as returned by the API.
///
/// `category_name` and `account_name` are filled in by the server from the
/// referenced records and are never sent back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The server-assigned ID.
    pub id: RecordId,
    /// What the transaction was for.
    #[serde(rename = "descricao")]
    pub description: String,
    /// The positive magnitude of the transaction.
    #[serde(rename = "valor")]
    pub amount: f64,
    /// When the transaction happened.
    #[serde(rename = "data")]
    pub date: Date,
    /// Whether the amount was earned or spent.
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    /// The category the transaction belongs to, if any.
    #[serde(rename = "categoria_id", default)]
    pub category_id: Option<RecordId>,
    /// The account the money moved through, if any.
    #[serde(rename = "conta_id", default)]
    pub account_id: Option<RecordId>,
    /// The name of the category, if any.
    #[serde(rename = "categoria_nome", default)]
    pub category_name: Option<String>,
    /// The name of the account, if any.
    #[serde(rename = "conta_nome", default)]
    pub account_name: Option<String>,
}

impl Transaction {
    /// The amount with the sign given by the transaction kind.
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }
}

/// The body sent to create or update a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct TransactionPayload {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "data")]
    pub date: Date,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    #[serde(rename = "categoria_id")]
    pub category_id: Option<RecordId>,
    #[serde(rename = "conta_id")]
    pub account_id: Option<RecordId>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use super::{ParseKindError, Transaction, TransactionKind, TransactionPayload};

    #[test]
    fn kind_uses_portuguese_wire_values() {
        assert_eq!(
            serde_json::to_value(TransactionKind::Income).unwrap(),
            json!("receita")
        );
        assert_eq!(
            serde_json::to_value(TransactionKind::Expense).unwrap(),
            json!("despesa")
        );
    }

    #[test]
    fn kind_rejects_unknown_string() {
        assert_eq!(
            "transfer".parse::<TransactionKind>(),
            Err(ParseKindError("transfer".to_owned()))
        );
    }

    #[test]
    fn payload_serializes_null_references() {
        let payload = TransactionPayload {
            description: "Rent".to_owned(),
            amount: 1200.0,
            date: date!(2025 - 03 - 01),
            kind: TransactionKind::Expense,
            category_id: None,
            account_id: Some(2),
        };

        let got = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            got,
            json!({
                "descricao": "Rent",
                "valor": 1200.0,
                "data": "2025-03-01",
                "tipo": "despesa",
                "categoria_id": null,
                "conta_id": 2,
            })
        );
    }

    #[test]
    fn transaction_deserializes_without_display_names() {
        let body = r#"{"id": 7, "descricao": "Salary", "valor": 3500.5,
            "data": "2025-02-28", "tipo": "receita", "categoria_id": null, "conta_id": null}"#;

        let got: Transaction = serde_json::from_str(body).unwrap();

        assert_eq!(got.id, 7);
        assert_eq!(got.date, date!(2025 - 02 - 28));
        assert_eq!(got.kind, TransactionKind::Income);
        assert_eq!(got.category_name, None);
        assert_eq!(got.signed_amount(), 3500.5);
    }
}
