use serde::{Deserialize, Serialize};

/// Request body for an assistant query.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// The assistant's answer. Always present; failures are reported inside the
/// string, never as an error status.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}
