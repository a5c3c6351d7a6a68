use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

/*----- */
// B2C2 Funding Rates
/*----- */
#[derive(Debug, Default, Serialize)]
pub struct B2c2FundingRatesRequest;

impl RestRequest for B2c2FundingRatesRequest {
    type Response = Vec<B2c2FundingRate>;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/funding_rates")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

#[derive(Debug, Deserialize)]
pub struct B2c2FundingRate {
    pub instrument: String,
    pub funding_rate: Decimal,
    pub created: DateTime<Utc>,
}
