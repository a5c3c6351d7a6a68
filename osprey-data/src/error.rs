use reqwest::Error;
use thiserror::Error;

/*----- */
// HttpError
/*----- */
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Deserialising JSON error: {error} for payload: {payload}")]
    Deserialise {
        error: serde_json::Error,
        payload: String,
    },

    #[error("Serialising JSON error: {0}")]
    Serialise(serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("HTTP request timed out")]
    HttpTimeout(reqwest::Error),

    /// REST http response error
    #[error("HTTP response (status={0}) error: {1}")]
    HttpResponse(reqwest::StatusCode, String),

    #[error("Unauthorised: {0}")]
    Unauthorised(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(error: Error) -> Self {
        match error {
            error if error.is_timeout() => HttpError::HttpTimeout(error),
            error => HttpError::Http(error),
        }
    }
}
