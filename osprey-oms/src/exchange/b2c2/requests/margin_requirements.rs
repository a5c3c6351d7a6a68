use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

/*----- */
// B2C2 Margin Requirements
/*----- */
#[derive(Debug, Default, Serialize)]
pub struct B2c2MarginRequirementsRequest;

impl RestRequest for B2c2MarginRequirementsRequest {
    type Response = B2c2MarginRequirements;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/margin_requirements")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

#[derive(Debug, Deserialize)]
pub struct B2c2MarginRequirements {
    pub margin_requirement: Decimal,
    pub margin_usage: Decimal,
    pub currency: String,
}
