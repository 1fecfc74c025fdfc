use thiserror::Error;

/// Errors from the parsing entry points.
///
/// Parsing text never fails; only the byte entry point can reject input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] std::str::Utf8Error),
}

/// Errors from the JSON wire codec.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("invalid wire JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed `{case}` payload: {source}")]
    Payload {
        case: String,
        #[source]
        source: serde_json::Error,
    },
}
