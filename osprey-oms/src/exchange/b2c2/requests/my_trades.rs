use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

use crate::model::{order::Side, trade::Trade};

/*----- */
// B2C2 My Trades
/*----- */
#[derive(Debug, Default, Serialize)]
pub struct B2c2MyTradesRequest;

impl RestRequest for B2c2MyTradesRequest {
    type Response = Vec<B2c2TradeRecord>;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/trade")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

/*----- */
// B2C2 My Trades - Response
/*----- */
// Unlike the anonymous order history, own-trade records carry the side.
#[derive(Debug, Deserialize)]
pub struct B2c2TradeRecord {
    pub trade_id: String,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub rfq_id: Option<String>,
    pub instrument: String,
    pub side: Side,
    pub price: Decimal,
    pub quantity: Decimal,
    pub created: DateTime<Utc>,
}

impl From<B2c2TradeRecord> for Trade {
    fn from(record: B2c2TradeRecord) -> Self {
        Trade {
            id: Some(record.trade_id),
            symbol: record.instrument,
            timestamp: record.created.timestamp_millis() as u64,
            price: record.price,
            amount: record.quantity,
            cost: record.price * record.quantity,
            side: Some(record.side),
            fee: None,
        }
    }
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn trade_record_maps_to_unified_trade() {
        let payload = r#"{
            "created":"2018-02-26T14:27:53.675962Z",
            "trade_id":"b2c50b72-92d4-499f-b0a3-dee6b37378be",
            "origin":"rest",
            "rfq_id":null,
            "instrument":"BTCUSD.SPOT",
            "side":"buy",
            "price":"10457.65110000",
            "quantity":"3.0000000000",
            "order":"d4e41399-e7a1-4576-9b46-349420040e1a"
        }"#;

        let trade = Trade::from(serde_json::from_str::<B2c2TradeRecord>(payload).unwrap());
        assert_eq!(trade.id.as_deref(), Some("b2c50b72-92d4-499f-b0a3-dee6b37378be"));
        assert_eq!(trade.symbol, "BTCUSD.SPOT");
        assert_eq!(trade.side, Some(Side::Buy));
        assert_eq!(trade.cost, dec!(31372.9533));
        assert_eq!(trade.timestamp, 1519655273675);
    }
}
