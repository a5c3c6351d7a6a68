use crate::error::HttpError;

use super::rest_request::RestRequest;

/*----- */
// ExchangeRequestBuilder
/*----- */
// Venue specific request signing. Builders carry their credentials as
// explicit state, so signing is an instance method rather than an
// associated function keyed off global configuration.
pub trait ExchangeRequestBuilder {
    fn build_signed_request<Request>(
        &self,
        builder: reqwest::RequestBuilder,
        request: Request,
    ) -> Result<reqwest::Request, HttpError>
    where
        Request: RestRequest;
}
