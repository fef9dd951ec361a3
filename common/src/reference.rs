use serde::{Deserialize, Serialize};

use crate::RecordId;

/// A category or account: anything a transaction can optionally point at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRecord {
    /// The server-assigned ID.
    pub id: RecordId,
    /// The display name.
    #[serde(rename = "nome")]
    pub name: String,
}

/// The body sent to create a category or account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReference {
    /// The display name.
    #[serde(rename = "nome")]
    pub name: String,
}

/// The two kinds of reference list a transaction can point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// Groups transactions by what they were for, e.g. "Groceries".
    Category,
    /// Where the money moved through, e.g. "Checking".
    Account,
}

impl ReferenceKind {
    /// The API endpoint for the collection, relative to `/api`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ReferenceKind::Category => "categorias",
            ReferenceKind::Account => "contas",
        }
    }

    /// The lowercase name shown in prompts and messages.
    pub fn noun(&self) -> &'static str {
        match self {
            ReferenceKind::Category => "category",
            ReferenceKind::Account => "account",
        }
    }

    /// The capitalized name used at the start of a sentence.
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceKind::Category => "Category",
            ReferenceKind::Account => "Account",
        }
    }

    /// The placeholder shown in the dropdown before anything is chosen.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ReferenceKind::Category => "Select a Category",
            ReferenceKind::Account => "Select an Account",
        }
    }
}
