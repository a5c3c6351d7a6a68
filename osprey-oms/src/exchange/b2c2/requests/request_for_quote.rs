use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use osprey_data::protocols::http::rest_request::RestRequest;

use crate::model::order::Side;

/*----- */
// B2C2 Request For Quote
/*----- */
#[derive(Debug, Serialize)]
pub struct B2c2QuoteRequest {
    instrument: String,
    side: Side,
    quantity: Decimal,
    client_rfq_id: Uuid,
}

impl B2c2QuoteRequest {
    pub fn new(instrument: &str, side: Side, quantity: Decimal) -> Self {
        Self {
            instrument: instrument.to_owned(),
            side,
            quantity,
            client_rfq_id: Uuid::new_v4(),
        }
    }
}

impl RestRequest for B2c2QuoteRequest {
    type Response = B2c2Quote;
    type Body = Self;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/request_for_quote")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

/*----- */
// B2C2 Request For Quote - Response
/*----- */
#[derive(Debug, Deserialize)]
pub struct B2c2Quote {
    pub rfq_id: String,
    pub client_rfq_id: String,
    pub instrument: String,
    pub side: Side,
    pub quantity: Decimal,
    pub price: Decimal,
    pub valid_until: DateTime<Utc>,
    pub created: DateTime<Utc>,
}
