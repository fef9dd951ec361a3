//! The data access layer: thin JSON helpers over the REST API at [API_ROOT].
//!
//! Every helper catches its own failures, reports them to the user through a
//! [Notifier] and returns a sentinel (an empty list or `None`) so the calling
//! flow can carry on or stop without handling errors itself.

use common::{ErrorBody, RecordId};
use serde::{Serialize, de::DeserializeOwned};

use crate::notifier::Notifier;

/// The path all API endpoints live under.
pub const API_ROOT: &str = "/api";

/// The HTTP methods the client uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// The method used by [DataAccess::submit_record].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    /// Create a new record.
    Post,
    /// Replace an existing record.
    Put,
}

impl WriteMethod {
    fn verb(&self) -> &'static str {
        match self {
            WriteMethod::Post => "add",
            WriteMethod::Put => "update",
        }
    }
}

impl From<WriteMethod> for HttpMethod {
    fn from(method: WriteMethod) -> Self {
        match method {
            WriteMethod::Post => HttpMethod::Post,
            WriteMethod::Put => HttpMethod::Put,
        }
    }
}

/// A request for the transport, with `path` relative to the site root.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    /// A JSON document, if the request has a body.
    pub body: Option<String>,
}

/// What came back from the server.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the server.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    /// Send `request` and wait for the full response body.
    ///
    /// # Errors
    /// Returns [ApiError::Network] if no response could be obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// The errors that can occur while talking to the API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response, e.g. the server is down.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    ///
    /// `message` holds the `erro` field of the response body when there was one.
    #[error("{status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    /// The response body did not have the expected shape.
    #[error("could not read the response: {0}")]
    Decode(String),
}

impl ApiError {
    fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Decode(error.to_string())
    }
}

/// [HttpClient] backed by the browser's `fetch`.
#[derive(Debug, Clone, Default)]
pub struct GlooClient;

impl HttpClient for GlooClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::Request;

        let builder = match request.method {
            HttpMethod::Get => Request::get(&request.path),
            HttpMethod::Post => Request::post(&request.path),
            HttpMethod::Put => Request::put(&request.path),
            HttpMethod::Delete => Request::delete(&request.path),
        };

        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)?
                    .send()
                    .await?
            }
            None => builder.send().await?,
        };

        Ok(HttpResponse {
            status: response.status(),
            status_text: response.status_text(),
            body: response.text().await?,
        })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(error: gloo_net::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}

/// Build the path for `endpoint`, optionally addressing the record `id`.
pub fn api_path(endpoint: &str, id: Option<RecordId>) -> String {
    match id {
        Some(id) => format!("{API_ROOT}/{endpoint}/{id}"),
        None => format!("{API_ROOT}/{endpoint}"),
    }
}

/// The generic read/write helpers used by every flow in the client.
#[derive(Debug, Clone)]
pub struct DataAccess<C, N> {
    client: C,
    notifier: N,
}

impl<C, N> DataAccess<C, N>
where
    C: HttpClient,
    N: Notifier,
{
    pub fn new(client: C, notifier: N) -> Self {
        Self { client, notifier }
    }

    /// The notifier failures are reported through.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    /// Read the whole collection at `/api/{endpoint}`.
    ///
    /// On any failure the user is alerted and an empty list is returned, so
    /// whatever renders the result shows an empty state instead of breaking.
    pub async fn fetch_collection<T>(&self, endpoint: &str) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        match self.try_fetch(endpoint).await {
            Ok(items) => items,
            Err(error) => {
                tracing::error!("Could not fetch data from {endpoint}: {error}");
                self.notifier.alert(&format!(
                    "Could not load the data for {endpoint}. Check the console."
                ));
                Vec::new()
            }
        }
    }

    /// Create (`id` is `None`) or update (`id` is set) a record with `payload`.
    ///
    /// Returns the record sent back by the server, or `None` after alerting the
    /// user if anything went wrong.
    pub async fn submit_record<P, R>(
        &self,
        endpoint: &str,
        payload: &P,
        method: WriteMethod,
        id: Option<RecordId>,
    ) -> Option<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        match self.try_submit(endpoint, payload, method, id).await {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::error!("Could not send data to {endpoint}: {error}");
                let message = error.server_message().map(str::to_owned).unwrap_or_else(|| {
                    format!("Could not {} {endpoint}: {error}", method.verb())
                });
                self.notifier.alert(&format!("Error: {message}"));
                None
            }
        }
    }

    /// Delete the record `id` from `/api/{endpoint}`.
    ///
    /// Returns the server's confirmation, or `None` after alerting the user.
    pub async fn delete_record(&self, endpoint: &str, id: RecordId) -> Option<serde_json::Value> {
        match self.try_delete(endpoint, id).await {
            Ok(confirmation) => Some(confirmation),
            Err(error) => {
                tracing::error!("Could not delete {id} from {endpoint}: {error}");
                let message = error
                    .server_message()
                    .map(str::to_owned)
                    .unwrap_or_else(|| format!("Could not delete {endpoint}: {error}"));
                self.notifier.alert(&format!("Error: {message}"));
                None
            }
        }
    }

    async fn try_fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, ApiError> {
        let response = self
            .client
            .send(HttpRequest {
                method: HttpMethod::Get,
                path: api_path(endpoint, None),
                body: None,
            })
            .await?;

        Ok(serde_json::from_str(&check_status(response)?.body)?)
    }

    async fn try_submit<P: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: &P,
        method: WriteMethod,
        id: Option<RecordId>,
    ) -> Result<R, ApiError> {
        let response = self
            .client
            .send(HttpRequest {
                method: method.into(),
                path: api_path(endpoint, id),
                body: Some(serde_json::to_string(payload)?),
            })
            .await?;

        Ok(serde_json::from_str(&check_status(response)?.body)?)
    }

    async fn try_delete(
        &self,
        endpoint: &str,
        id: RecordId,
    ) -> Result<serde_json::Value, ApiError> {
        let response = self
            .client
            .send(HttpRequest {
                method: HttpMethod::Delete,
                path: api_path(endpoint, Some(id)),
                body: None,
            })
            .await?;

        Ok(serde_json::from_str(&check_status(response)?.body)?)
    }
}

fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }

    Err(ApiError::Status {
        status: response.status,
        message: ErrorBody::message_from(&response.body),
        status_text: response.status_text,
    })
}
