//! The client's state and the actions that change it.

use std::rc::Rc;

use common::{NamedRecord, RecordId, ReferenceKind, Transaction};
use time::Date;
use yew::Reducible;

use crate::form::{FormField, TransactionForm};

/// Everything the page shows, owned by the root component.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    pub categories: Vec<NamedRecord>,
    pub accounts: Vec<NamedRecord>,
    /// The transactions from the most recent fetch.
    pub snapshot: Vec<Transaction>,
    pub form: TransactionForm,
    /// Whether the initial load has finished.
    pub ready: bool,
}

impl ClientState {
    pub fn new(today: Date) -> Self {
        Self {
            categories: Vec::new(),
            accounts: Vec::new(),
            snapshot: Vec::new(),
            form: TransactionForm::new(today),
            ready: false,
        }
    }

    /// Look up a transaction in the snapshot.
    pub fn find_transaction(&self, id: RecordId) -> Option<&Transaction> {
        find_transaction(&self.snapshot, id)
    }

    /// The reference list for `kind`.
    pub fn references(&self, kind: ReferenceKind) -> &[NamedRecord] {
        match kind {
            ReferenceKind::Category => &self.categories,
            ReferenceKind::Account => &self.accounts,
        }
    }
}

/// Look up the transaction with `id` in `snapshot`.
pub fn find_transaction(snapshot: &[Transaction], id: RecordId) -> Option<&Transaction> {
    snapshot.iter().find(|transaction| transaction.id == id)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ReferencesLoaded(ReferenceKind, Vec<NamedRecord>),
    /// Replace the snapshot wholesale.
    TransactionsLoaded(Vec<Transaction>),
    /// The initial load pipeline has finished.
    Ready,
    BeginEdit(Transaction),
    ResetForm { today: Date },
    UpdateField(FormField),
    /// Choose `id` in the dropdown for `kind`.
    SelectReference(ReferenceKind, RecordId),
}

impl Reducible for ClientState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();

        match action {
            Action::ReferencesLoaded(ReferenceKind::Category, categories) => {
                state.categories = categories
            }
            Action::ReferencesLoaded(ReferenceKind::Account, accounts) => state.accounts = accounts,
            Action::TransactionsLoaded(transactions) => state.snapshot = transactions,
            Action::Ready => state.ready = true,
            Action::BeginEdit(transaction) => state.form.populate(&transaction),
            Action::ResetForm { today } => state.form.reset(today),
            Action::UpdateField(field) => state.form.apply(field),
            Action::SelectReference(ReferenceKind::Category, id) => {
                state.form.apply(FormField::Category(Some(id)))
            }
            Action::SelectReference(ReferenceKind::Account, id) => {
                state.form.apply(FormField::Account(Some(id)))
            }
        }

        Rc::new(state)
    }
}
