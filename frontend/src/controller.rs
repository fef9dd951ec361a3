//! The user flows: loading, saving, editing, deleting and adding references.
//!
//! Flows never touch the state directly. They report what changed through a
//! `dispatch` callback so the root component's reducer stays the only owner.

use common::{
    NamedRecord, NewReference, RecordId, ReferenceKind, Transaction, TransactionPayload,
};
use time::{Date, OffsetDateTime};

use crate::{
    api::{DataAccess, HttpClient, WriteMethod},
    form::{FormMode, TransactionForm, ValidationError},
    notifier::Notifier,
    state::{Action, find_transaction},
};

/// The endpoint for transactions, relative to the API root.
pub const TRANSACTIONS_ENDPOINT: &str = "transacoes";

/// One step of the initial page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStep {
    References(ReferenceKind),
    Transactions,
}

/// The initial load, in order. The steps do not depend on each other's
/// results but all of them must finish before the form is usable.
pub const INITIAL_LOAD: [LoadStep; 3] = [
    LoadStep::References(ReferenceKind::Category),
    LoadStep::References(ReferenceKind::Account),
    LoadStep::Transactions,
];

/// The controls on each table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    /// The value of the `data-action` attribute on the row's button.
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "edit" => Some(RowAction::Edit),
            "delete" => Some(RowAction::Delete),
            _ => None,
        }
    }
}

/// What a flow did, for the caller to follow up on (e.g. move focus).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The flow stopped early: invalid input, a cancelled dialog or a failed request.
    Skipped,
    Saved,
    EditStarted,
    Deleted,
    ReferenceAdded(RecordId),
}

/// Today's date in the browser's timezone, falling back to UTC.
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Runs the user flows against the API.
#[derive(Debug, Clone)]
pub struct Controller<C, N> {
    data: DataAccess<C, N>,
    today: fn() -> Date,
}

impl<C, N> Controller<C, N>
where
    C: HttpClient,
    N: Notifier,
{
    pub fn new(data: DataAccess<C, N>) -> Self {
        Self {
            data,
            today: local_today,
        }
    }

    /// Use `today` instead of the local clock to date reset forms.
    pub fn with_clock(mut self, today: fn() -> Date) -> Self {
        self.today = today;
        self
    }

    fn notifier(&self) -> &N {
        self.data.notifier()
    }

    /// Run [INITIAL_LOAD] one step at a time, then mark the page ready.
    pub async fn load_initial(&self, dispatch: &impl Fn(Action)) {
        for step in INITIAL_LOAD {
            match step {
                LoadStep::References(kind) => self.load_references(kind, dispatch).await,
                LoadStep::Transactions => self.load_transactions(dispatch).await,
            }
        }

        dispatch(Action::ResetForm {
            today: (self.today)(),
        });
        dispatch(Action::Ready);
    }

    pub async fn load_references(&self, kind: ReferenceKind, dispatch: &impl Fn(Action)) {
        let records: Vec<NamedRecord> = self.data.fetch_collection(kind.endpoint()).await;
        dispatch(Action::ReferencesLoaded(kind, records));
    }

    pub async fn load_categories(&self, dispatch: &impl Fn(Action)) {
        self.load_references(ReferenceKind::Category, dispatch).await
    }

    pub async fn load_accounts(&self, dispatch: &impl Fn(Action)) {
        self.load_references(ReferenceKind::Account, dispatch).await
    }

    /// Fetch the transactions and replace the snapshot with them.
    pub async fn load_transactions(&self, dispatch: &impl Fn(Action)) {
        let transactions: Vec<Transaction> =
            self.data.fetch_collection(TRANSACTIONS_ENDPOINT).await;
        dispatch(Action::TransactionsLoaded(transactions));
    }

    /// Validate `form` and create or update the transaction it describes.
    ///
    /// On success the form is reset and the transactions are re-fetched. On
    /// failure nothing is dispatched, so the user keeps what they typed.
    pub async fn save(&self, form: &TransactionForm, dispatch: &impl Fn(Action)) -> Outcome {
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(error) => {
                tracing::debug!("Rejected transaction form: {error}");
                self.notifier().alert(ValidationError::USER_MESSAGE);
                return Outcome::Skipped;
            }
        };

        let (method, id, done) = match form.mode() {
            FormMode::Edit(id) => (WriteMethod::Put, Some(id), "updated"),
            FormMode::Create => (WriteMethod::Post, None, "added"),
        };

        let saved: Option<Transaction> = self
            .data
            .submit_record::<TransactionPayload, _>(TRANSACTIONS_ENDPOINT, &payload, method, id)
            .await;

        if saved.is_none() {
            return Outcome::Skipped;
        }

        self.notifier()
            .alert(&format!("Transaction {done} successfully!"));
        dispatch(Action::ResetForm {
            today: (self.today)(),
        });
        self.load_transactions(dispatch).await;

        Outcome::Saved
    }

    /// Load the transaction `id` from `snapshot` into the form.
    pub fn edit(&self, snapshot: &[Transaction], id: RecordId, dispatch: &impl Fn(Action)) -> Outcome {
        match find_transaction(snapshot, id) {
            Some(transaction) => {
                dispatch(Action::BeginEdit(transaction.clone()));
                Outcome::EditStarted
            }
            None => {
                tracing::warn!("Transaction {id} is not in the current snapshot");
                self.notifier().alert("Transaction not found!");
                Outcome::Skipped
            }
        }
    }

    /// Ask for confirmation, then delete the transaction `id`.
    ///
    /// The form is reset afterwards in case it was holding the deleted record.
    pub async fn delete(&self, id: RecordId, dispatch: &impl Fn(Action)) -> Outcome {
        if !self
            .notifier()
            .confirm("Are you sure you want to delete this transaction?")
        {
            return Outcome::Skipped;
        }

        if self
            .data
            .delete_record(TRANSACTIONS_ENDPOINT, id)
            .await
            .is_none()
        {
            return Outcome::Skipped;
        }

        self.notifier().alert("Transaction deleted successfully!");
        self.load_transactions(dispatch).await;
        dispatch(Action::ResetForm {
            today: (self.today)(),
        });

        Outcome::Deleted
    }

    /// Prompt for a name and create a new category or account with it.
    ///
    /// The matching list is re-fetched and the new record selected in the form.
    pub async fn add_reference(&self, kind: ReferenceKind, dispatch: &impl Fn(Action)) -> Outcome {
        let name = self
            .notifier()
            .prompt(&format!("Enter the name of the new {}:", kind.noun()))
            .map(|name| name.trim().to_owned())
            .unwrap_or_default();

        if name.is_empty() {
            return Outcome::Skipped;
        }

        let created: Option<NamedRecord> = self
            .data
            .submit_record(
                kind.endpoint(),
                &NewReference { name },
                WriteMethod::Post,
                None,
            )
            .await;

        let Some(created) = created else {
            return Outcome::Skipped;
        };

        self.notifier()
            .alert(&format!("{} added successfully!", kind.label()));

        self.load_references(kind, dispatch).await;
        dispatch(Action::SelectReference(kind, created.id));

        Outcome::ReferenceAdded(created.id)
    }

    /// Route a click on a row control to its handler.
    pub async fn handle_row_action(
        &self,
        action: RowAction,
        id: RecordId,
        snapshot: &[Transaction],
        dispatch: &impl Fn(Action),
    ) -> Outcome {
        match action {
            RowAction::Edit => self.edit(snapshot, id, dispatch),
            RowAction::Delete => self.delete(id, dispatch).await,
        }
    }
}
