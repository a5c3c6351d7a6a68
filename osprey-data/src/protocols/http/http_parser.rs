use crate::error::HttpError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::error;

pub trait HttpParser {
    type ApiError: DeserializeOwned;
    type OutputError: From<HttpError>;

    fn parse<Response>(
        &self,
        status: StatusCode,
        payload: &[u8],
    ) -> Result<Response, Self::OutputError>
    where
        Response: DeserializeOwned,
    {
        // Attempt to deserialise reqwest::Response bytes into Ok(Response).
        // Non-success statuses skip straight to the API error branch so a
        // venue error body can never be mistaken for a permissive Response
        // type.
        let parse_ok_error = if status.is_success() {
            match serde_json::from_slice::<Response>(payload) {
                Ok(response) => return Ok(response),
                Err(serde_error) => Some(serde_error),
            }
        } else {
            None
        };

        // Attempt to deserialise the API Error if Ok(Response) was not produced
        let parse_api_error_error = match serde_json::from_slice::<Self::ApiError>(payload) {
            Ok(api_error) => return Err(self.parse_api_error(status, api_error)),
            Err(serde_error) => serde_error,
        };

        // Log errors if failed to deserialise into either Response or Self::ApiError
        error!(
            status_code = ?status,
            ?parse_ok_error,
            ?parse_api_error_error,
            response_body = %String::from_utf8_lossy(payload),
            "error deserializing HTTP response"
        );

        Err(Self::OutputError::from(HttpError::Deserialise {
            error: parse_api_error_error,
            payload: String::from_utf8_lossy(payload).into_owned(),
        }))
    }

    // If [`parse`](Self::parse) fails to deserialise the `Ok(Response)`, this function
    // parses the API [`Self::ApiError`] associated with the response.
    fn parse_api_error(&self, status: StatusCode, error: Self::ApiError) -> Self::OutputError;
}

#[derive(Debug)]
pub struct StandardHttpParser;

impl HttpParser for StandardHttpParser {
    type ApiError = serde_json::Value;
    type OutputError = HttpError;

    fn parse_api_error(&self, status: StatusCode, api_error: Self::ApiError) -> Self::OutputError {
        // For simplicity, use serde_json::Value as Error and extract raw String for parsing
        HttpError::HttpResponse(status, api_error.to_string())
    }
}
