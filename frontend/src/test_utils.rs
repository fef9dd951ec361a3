//! Fakes for driving the client without a browser.

use std::{cell::RefCell, collections::VecDeque};

use common::{Transaction, TransactionKind};
use time::macros::date;

use crate::{
    api::{ApiError, HttpClient, HttpRequest, HttpResponse},
    notifier::Notifier,
};

/// Answers requests with queued responses and records what was sent.
#[derive(Debug, Default)]
pub(crate) struct FakeClient {
    responses: RefCell<VecDeque<HttpResponse>>,
    requests: RefCell<Vec<HttpRequest>>,
    offline: bool,
}

impl FakeClient {
    pub(crate) fn new(responses: Vec<HttpResponse>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            ..Default::default()
        }
    }

    /// A client whose every request fails with a network error.
    pub(crate) fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpClient for FakeClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);

        if self.offline {
            return Err(ApiError::Network("connection refused".to_owned()));
        }

        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApiError::Network("no response queued".to_owned()))
    }
}

/// Records alerts and gives canned answers to dialogs.
#[derive(Debug, Default)]
pub(crate) struct FakeNotifier {
    alerts: RefCell<Vec<String>>,
    confirm: bool,
    prompt: Option<String>,
}

impl FakeNotifier {
    pub(crate) fn with_confirm(mut self, answer: bool) -> Self {
        self.confirm = answer;
        self
    }

    pub(crate) fn with_prompt(mut self, answer: Option<&str>) -> Self {
        self.prompt = answer.map(str::to_owned);
        self
    }

    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for FakeNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn confirm(&self, _message: &str) -> bool {
        self.confirm
    }

    fn prompt(&self, _message: &str) -> Option<String> {
        self.prompt.clone()
    }
}

pub(crate) fn json_response(status: u16, body: serde_json::Value) -> HttpResponse {
    HttpResponse {
        status,
        status_text: String::new(),
        body: body.to_string(),
    }
}

pub(crate) fn transaction(id: i64, amount: f64, kind: TransactionKind) -> Transaction {
    Transaction {
        id,
        description: format!("transaction #{id}"),
        amount,
        date: date!(2025 - 05 - 20),
        kind,
        category_id: None,
        account_id: None,
        category_name: None,
        account_name: None,
    }
}
