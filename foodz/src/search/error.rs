#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("failure sending business search request: {source}")]
    NetworkError { source: reqwest::Error },
    #[error("failure decoding business search response: {source}")]
    DecodeError { source: serde_json::Error },
    #[error("business search returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },
    #[error("invalid business search endpoint '{0}': {1}")]
    InvalidEndpoint(String, String),
    #[error("no API key configured for business search")]
    MissingApiKey,
    #[error("error creating a runtime to handle async code: {0}")]
    TokioError(String),
}
