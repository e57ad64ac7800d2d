use thiserror::Error;

// Transport-level failures, surfaced by the node client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SdkError {
    // build()/execute() invoked before the required field was attached,
    // fatal to that builder instance
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    // Failures from the delegated transport call, propagated unchanged
    #[error(transparent)]
    Transport(#[from] ClientError),
}
