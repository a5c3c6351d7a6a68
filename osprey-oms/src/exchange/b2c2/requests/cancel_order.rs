use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use osprey_data::protocols::http::rest_request::RestRequest;

use crate::exchange::errors::ExecutionError;
use crate::model::order::{CancelOrder, Side};

/*----- */
// B2C2 Cancel Order
/*----- */
// Cancellation is side-specific at this venue, so the caller must say which
// book the order sits on. Anything other than "buy" or "sell" is rejected
// before any network call.
#[derive(Debug, Serialize)]
pub struct B2c2CancelOrder {
    #[serde(skip)]
    side: Side,
    id: String,
}

impl B2c2CancelOrder {
    pub fn new(request: &CancelOrder) -> Result<Self, ExecutionError> {
        let side = match request.side.as_deref() {
            Some("buy") => Side::Buy,
            Some("sell") => Side::Sell,
            _ => {
                return Err(ExecutionError::Argument(
                    "cancel_order requires a side parameter, \"buy\" or \"sell\"",
                ))
            }
        };

        Ok(Self {
            side,
            id: request.id.clone(),
        })
    }

    fn path_for(side: Side) -> &'static str {
        match side {
            Side::Buy => "/my/buy/cancel",
            Side::Sell => "/my/sell/cancel",
        }
    }
}

impl RestRequest for B2c2CancelOrder {
    // Raw venue acknowledgment, passed through untouched
    type Response = Value;
    type Body = Self;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed(Self::path_for(self.side))
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}
