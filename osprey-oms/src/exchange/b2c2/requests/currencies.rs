use std::borrow::Cow;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

/*----- */
// B2C2 Currencies
/*----- */
#[derive(Debug, Default, Serialize)]
pub struct B2c2CurrenciesRequest;

impl RestRequest for B2c2CurrenciesRequest {
    type Response = BTreeMap<String, B2c2Currency>;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/currency")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

#[derive(Debug, Deserialize)]
pub struct B2c2Currency {
    pub stable_coin: bool,
    pub is_crypto: bool,
    pub currency_type: String,
    #[serde(default)]
    pub readable_name: Option<String>,
    #[serde(default)]
    pub long_only: bool,
    pub minimum_trade_size: Decimal,
}
