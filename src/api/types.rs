use serde::{Deserialize, Serialize};

/// Body of `POST <endpoint>`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

/// Expected body of a 2xx reply. Extra fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatResponse {
    pub response: String,
}
