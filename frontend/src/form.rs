//! The transaction form and its two modes.
//!
//! The form is in [FormMode::Create] while its hidden ID is empty and in
//! [FormMode::Edit] once a row from the table has been loaded into it.

use common::{RecordId, Transaction, TransactionKind, TransactionPayload, parse_iso_date};
use time::Date;

/// Heading shown while creating a transaction.
pub const CREATE_HEADING: &str = "New/Edit Transaction";
/// Heading shown while editing a transaction.
pub const EDIT_HEADING: &str = "Edit Transaction";

/// Whether submitting the form creates a new record or updates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    /// The label of the submit button.
    pub fn button_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Save",
            FormMode::Edit(_) => "Update",
        }
    }

    /// The heading above the form.
    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => CREATE_HEADING,
            FormMode::Edit(_) => EDIT_HEADING,
        }
    }
}

/// A single edit to one of the form's fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Description(String),
    Amount(String),
    Date(String),
    Kind(TransactionKind),
    Category(Option<RecordId>),
    Account(Option<RecordId>),
}

/// The form input that stopped a submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("the description is empty")]
    EmptyDescription,
    #[error("\"{0}\" is not a number")]
    InvalidAmount(String),
    #[error("\"{0}\" is not a date")]
    InvalidDate(String),
}

impl ValidationError {
    /// The message shown to the user for any validation failure.
    pub const USER_MESSAGE: &'static str = "Please fill in the Description, Amount and Date.";
}

/// The values currently in the transaction form.
///
/// Text inputs are kept as typed so that partially entered values survive
/// re-renders; they are only parsed by [TransactionForm::to_payload].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    /// The hidden record ID, set while editing.
    pub id: Option<RecordId>,
    pub description: String,
    pub amount: String,
    /// The date as `YYYY-MM-DD`, as produced by a date input.
    pub date: String,
    pub kind: TransactionKind,
    pub category_id: Option<RecordId>,
    pub account_id: Option<RecordId>,
}

impl TransactionForm {
    /// An empty form dated `today`.
    pub fn new(today: Date) -> Self {
        Self {
            id: None,
            description: String::new(),
            amount: String::new(),
            date: today.to_string(),
            kind: TransactionKind::Expense,
            category_id: None,
            account_id: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        match self.id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    /// Go back to create mode with every field at its default.
    pub fn reset(&mut self, today: Date) {
        *self = Self::new(today);
    }

    /// Load `transaction` into the form and switch to edit mode.
    pub fn populate(&mut self, transaction: &Transaction) {
        *self = Self {
            id: Some(transaction.id),
            description: transaction.description.clone(),
            amount: transaction.amount.to_string(),
            date: transaction.date.to_string(),
            kind: transaction.kind,
            category_id: transaction.category_id,
            account_id: transaction.account_id,
        };
    }

    pub fn apply(&mut self, field: FormField) {
        match field {
            FormField::Description(description) => self.description = description,
            FormField::Amount(amount) => self.amount = amount,
            FormField::Date(date) => self.date = date,
            FormField::Kind(kind) => self.kind = kind,
            FormField::Category(category_id) => self.category_id = category_id,
            FormField::Account(account_id) => self.account_id = account_id,
        }
    }

    /// Validate the form and build the request body.
    ///
    /// # Errors
    /// Returns a [ValidationError] if the description is blank, the amount is
    /// not a finite number, or the date is missing or malformed.
    pub fn to_payload(&self) -> Result<TransactionPayload, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| ValidationError::InvalidAmount(self.amount.clone()))?;

        let date = parse_iso_date(self.date.trim())
            .ok_or_else(|| ValidationError::InvalidDate(self.date.clone()))?;

        Ok(TransactionPayload {
            description: description.to_owned(),
            amount,
            date,
            kind: self.kind,
            category_id: self.category_id,
            account_id: self.account_id,
        })
    }
}
