use thiserror::Error;

/// Errors that can occur while decoding a raw meal record or the
/// response envelope around it
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A required scalar field was absent from the record
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A required scalar field was present but not a string
    #[error("field has unexpected type: {0}")]
    InvalidField(&'static str),

    /// The response body did not parse as the expected envelope
    #[error("malformed response envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}

/// Errors that can occur during a fetch against the search endpoint
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure, including non-success HTTP statuses
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Success status but no body to decode
    #[error("empty response body")]
    EmptyResponse,

    /// Body present but the envelope or a contained record failed to decode
    #[error("failed to decode response: {0}")]
    Decode(#[from] DecodeError),
}
