use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

const DEFAULT_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// One implementor per venue endpoint. Parameters travel as a JSON body, the
// request type doubles as that body where the endpoint takes one.
pub trait RestRequest {
    type Response: DeserializeOwned;
    type Body: Serialize;

    fn path(&self) -> std::borrow::Cow<'static, str>;

    fn method() -> reqwest::Method;

    // Signed by default, public market data endpoints opt out
    fn requires_signature() -> bool {
        true
    }

    fn body(&self) -> Option<&Self::Body> {
        None
    }

    fn timeout() -> Duration {
        DEFAULT_HTTP_REQUEST_TIMEOUT
    }
}
