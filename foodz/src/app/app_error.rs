use thiserror::Error;

use crate::search::SearchError;

#[derive(Error, Debug)]
pub enum FoodzAppError {
    #[error("failure reading foodz configuration: {source}")]
    ConfigurationError {
        #[from]
        source: config::ConfigError,
    },
    #[error("business search failed: {source}")]
    SearchError {
        #[from]
        source: SearchError,
    },
    #[error("failure encoding output: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("business '{0}' not found in search results")]
    BusinessNotFound(String),
    #[error("search finished without delivering a result")]
    NoCompletion,
    #[error("error creating a runtime to handle async code: {0}")]
    TokioError(String),
}
