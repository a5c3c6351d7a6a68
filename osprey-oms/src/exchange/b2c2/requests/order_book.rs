use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

use crate::model::order_book::{Level, OrderBook};

/*----- */
// B2C2 Order Book
/*----- */
#[derive(Debug, Serialize)]
pub struct B2c2OrderBookRequest {
    cointype: String,
}

impl B2c2OrderBookRequest {
    pub fn new(instrument_id: &str) -> Self {
        Self {
            cointype: instrument_id.to_owned(),
        }
    }
}

impl RestRequest for B2c2OrderBookRequest {
    type Response = B2c2OrderBookResponse;
    type Body = Self;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/orders")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

/*----- */
// B2C2 Order Book - Response
/*----- */
#[derive(Debug, Deserialize)]
pub struct B2c2OrderBookResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub buyorders: Vec<B2c2BookLevel>,
    #[serde(default)]
    pub sellorders: Vec<B2c2BookLevel>,
}

#[derive(Debug, Deserialize)]
pub struct B2c2BookLevel {
    pub rate: f64,
    pub amount: f64,
}

impl B2c2OrderBookResponse {
    pub fn into_order_book(self, symbol: &str) -> OrderBook {
        OrderBook {
            symbol: symbol.to_owned(),
            bids: self
                .buyorders
                .into_iter()
                .map(|level| Level::new(level.rate, level.amount))
                .collect(),
            asks: self
                .sellorders
                .into_iter()
                .map(|level| Level::new(level.rate, level.amount))
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn buy_and_sell_ladders_map_to_bids_and_asks() {
        let payload = r#"{
            "status":"ok",
            "buyorders":[
                {"rate":21540.0,"amount":0.5},
                {"rate":21530.5,"amount":1.25}
            ],
            "sellorders":[
                {"rate":21555.0,"amount":0.75}
            ]
        }"#;

        let response = serde_json::from_str::<B2c2OrderBookResponse>(payload).unwrap();
        let book = response.into_order_book("BTCUSD.SPOT");

        assert_eq!(book.symbol, "BTCUSD.SPOT");
        assert_eq!(
            book.bids,
            vec![Level::new(21540.0, 0.5), Level::new(21530.5, 1.25)]
        );
        assert_eq!(book.asks, vec![Level::new(21555.0, 0.75)]);
    }

    #[test]
    fn empty_ladders_deserialize_to_empty_book() {
        let response = serde_json::from_str::<B2c2OrderBookResponse>(r#"{"status":"ok"}"#).unwrap();
        let book = response.into_order_book("LTC/AUD");
        assert!(book.bids.is_empty());
        assert!(book.asks.is_empty());
    }
}
