use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

use crate::model::{market::Market, ticker::Ticker};

/*----- */
// B2C2 Latest Prices
/*----- */
// Bulk endpoint, one call returns every instrument. The ticker for a single
// symbol is picked out of the map by lower-cased instrument id.
#[derive(Debug, Default, Serialize)]
pub struct B2c2LatestPricesRequest;

impl RestRequest for B2c2LatestPricesRequest {
    type Response = B2c2LatestPricesResponse;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/latest")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }

    // The only public endpoint at this venue, sent without auth headers
    fn requires_signature() -> bool {
        false
    }
}

/*----- */
// B2C2 Latest Prices - Response
/*----- */
#[derive(Debug, Deserialize)]
pub struct B2c2LatestPricesResponse {
    pub prices: BTreeMap<String, B2c2TickerData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct B2c2TickerData {
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: Option<f64>,
}

impl B2c2LatestPricesResponse {
    // The venue publishes no high / low / volume figures, those stay None.
    pub fn ticker(&self, market: &Market) -> Option<Ticker> {
        let data = self.prices.get(&market.id.to_lowercase())?;
        Some(Ticker {
            symbol: market.symbol.to_owned(),
            timestamp: Utc::now().timestamp_millis() as u64,
            bid: data.bid,
            ask: data.ask,
            last: data.last,
            close: data.last,
            open: None,
            high: None,
            low: None,
            vwap: None,
            base_volume: None,
            quote_volume: None,
        })
    }
}
