use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

/*----- */
// B2C2 Instruments
/*----- */
#[derive(Debug, Default, Serialize)]
pub struct B2c2InstrumentsRequest;

impl RestRequest for B2c2InstrumentsRequest {
    type Response = Vec<B2c2Instrument>;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/instruments")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

#[derive(Debug, Deserialize)]
pub struct B2c2Instrument {
    pub name: String,
}
