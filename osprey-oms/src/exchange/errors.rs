use osprey_data::error::HttpError;
use thiserror::Error;

/*----- */
// Execution errors
/*----- */
// Domain errors surfaced to the caller. Venue reported codes are mapped into
// these categories by the per-venue response parser, never retried.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("missing or invalid argument: {0}")]
    Argument(&'static str),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("invalid order: {0}")]
    InvalidOrder(String),

    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("invalid nonce: {0}")]
    InvalidNonce(String),

    #[error("account suspended: {0}")]
    AccountSuspended(String),

    #[error("bad symbol: {0}")]
    BadSymbol(String),

    // Catch-all for venue codes with no dedicated category
    #[error("exchange error: {0}")]
    Exchange(String),

    #[error(transparent)]
    Http(HttpError),
}

impl From<HttpError> for ExecutionError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Unauthorised(message) => ExecutionError::Authentication(message),
            error => ExecutionError::Http(error),
        }
    }
}
