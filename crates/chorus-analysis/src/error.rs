use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The caller supplied an empty comment list.
    #[error("No comments")]
    NoComments,

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model endpoint answered with a non-2xx status.
    #[error("model service returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The model endpoint's JSON envelope could not be decoded.
    #[error("model response envelope could not be decoded: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("model response contained no text")]
    EmptyResponse,

    /// The synthesis pass returned text that is not valid JSON.
    #[error("synthesis response is not valid JSON: {0}")]
    SynthesisParse(#[source] serde_json::Error),

    #[error("synthesis response is not a JSON object (got {0})")]
    SynthesisShape(String),

    #[error("invalid model base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
