use serde::{Deserialize, Serialize};

/// The JSON body of every non-success API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// A message that can be shown to the user as is.
    #[serde(rename = "erro")]
    pub message: String,
}

impl ErrorBody {
    /// Extract the message from a response body, if it has the expected shape.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|error| error.message)
            .filter(|message| !message.trim().is_empty())
    }
}

/// The JSON body returned after a record is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    /// A human readable confirmation.
    #[serde(rename = "mensagem")]
    pub message: String,
}
