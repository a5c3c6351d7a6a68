use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

use crate::model::trade::Trade;

/*----- */
// B2C2 Trade History
/*----- */
#[derive(Debug, Serialize)]
pub struct B2c2TradeHistoryRequest {
    cointype: String,
}

impl B2c2TradeHistoryRequest {
    pub fn new(instrument_id: &str) -> Self {
        Self {
            cointype: instrument_id.to_owned(),
        }
    }
}

impl RestRequest for B2c2TradeHistoryRequest {
    type Response = B2c2TradeHistoryResponse;
    type Body = Self;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/orders/history")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

/*----- */
// B2C2 Trade History - Response
/*----- */
#[derive(Debug, Deserialize)]
pub struct B2c2TradeHistoryResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub orders: Vec<B2c2HistoricTrade>,
}

#[derive(Debug, Deserialize)]
pub struct B2c2HistoricTrade {
    pub amount: Decimal,
    pub rate: Decimal,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub coin: Option<String>,
    // Milliseconds since epoch
    pub solddate: u64,
    pub market: String,
}

impl From<B2c2HistoricTrade> for Trade {
    fn from(trade: B2c2HistoricTrade) -> Self {
        // The venue-reported total wins. Otherwise derive the cost with exact
        // decimal multiplication, never through f64.
        let cost = trade.total.unwrap_or_else(|| trade.rate * trade.amount);
        Trade {
            id: None,
            symbol: trade.market,
            timestamp: trade.solddate,
            price: trade.rate,
            amount: trade.amount,
            cost,
            side: None,
            fee: None,
        }
    }
}
