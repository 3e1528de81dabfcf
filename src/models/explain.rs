use serde::{Deserialize, Serialize};

/// Body of `POST /api/explain`. Both fields are optional at the serde level
/// so that a missing `text` reaches the handler's own validation (and its
/// French error message) instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// BCP 47-ish language tag; defaults to "fr" when absent.
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    pub success: bool,
    pub explanation: String,
    pub original_text: String,
}
