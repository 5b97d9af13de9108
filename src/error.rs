use thiserror::Error;

/// Failure modes of one advisory request, caught at the service boundary.
#[derive(Error, Debug)]
pub enum AiError {
    /// The network call could not complete.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint returned an error payload or an empty response.
    #[error("model error: {0}")]
    Model(String),

    /// The response text did not match the expected schema.
    #[error("parse error: {0}")]
    Parse(String),
}
